use crate::error;
use crate::lang::{Error, Line};
use std::collections::BTreeMap;
use std::ops::Bound;

type Result<T> = std::result::Result<T, Error>;

/// ## Program memory
///
/// Lines keyed by number and iterated in ascending order. Key
/// order is both LIST order and default execution order.
#[derive(Debug, Default)]
pub struct Program {
    lines: BTreeMap<i32, Line>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Store a line, replacing any prior line with the same number.
    pub fn add(&mut self, line: Line) -> Result<()> {
        let number = match line.number() {
            Some(number) if number > 0 => number,
            _ => return Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        };
        if line.statement().is_none() {
            return Err(error!(SyntaxError; "EMPTY LINE"));
        }
        self.lines.insert(number, line);
        Ok(())
    }

    pub fn remove(&mut self, number: i32) {
        self.lines.remove(&number);
    }

    pub fn get(&self, number: i32) -> Option<&Line> {
        self.lines.get(&number)
    }

    pub fn has_line(&self, number: i32) -> bool {
        self.lines.contains_key(&number)
    }

    /// Smallest stored number strictly greater than `number`.
    /// `next_line(0)` is the first line of the program.
    pub fn next_line(&self, number: i32) -> Option<i32> {
        self.lines
            .range((Bound::Excluded(number), Bound::Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn list(&self) -> Vec<String> {
        self.lines.values().map(Line::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lex, parse};
    use quickcheck::QuickCheck;

    fn line(s: &str) -> Line {
        parse(&lex(s), s).unwrap()
    }

    #[test]
    fn test_add_replaces_same_number() {
        let mut program = Program::new();
        program.add(line("10 PRINT 1")).unwrap();
        program.add(line("10 PRINT 2")).unwrap();
        assert_eq!(program.list(), vec!["10: PRINT 2".to_string()]);
    }

    #[test]
    fn test_add_rejects_unnumbered_line() {
        let mut program = Program::new();
        let error = program.add(line("PRINT 1")).unwrap_err();
        assert_eq!(error.to_string(), "SYNTAX ERROR; INVALID LINE NUMBER");
    }

    #[test]
    fn test_add_rejects_zero_line_number() {
        let mut program = Program::new();
        let error = program.add(line("0 PRINT 1")).unwrap_err();
        assert_eq!(error.to_string(), "SYNTAX ERROR; INVALID LINE NUMBER");
    }

    #[test]
    fn test_next_line() {
        let mut program = Program::new();
        for s in &["30 END", "10 PRINT 1", "20 PRINT 2"] {
            program.add(line(s)).unwrap();
        }
        assert_eq!(program.next_line(0), Some(10));
        assert_eq!(program.next_line(10), Some(20));
        assert_eq!(program.next_line(15), Some(20));
        assert_eq!(program.next_line(30), None);
    }

    #[test]
    fn test_remove_is_quiet_when_absent() {
        let mut program = Program::new();
        program.add(line("10 PRINT 1")).unwrap();
        program.remove(99);
        program.remove(10);
        assert!(program.list().is_empty());
        assert!(!program.has_line(10));
    }

    #[test]
    fn test_next_line_walks_every_stored_number_in_order() {
        fn prop(numbers: Vec<i32>) -> bool {
            let mut program = Program::new();
            let mut expected: Vec<i32> = vec![];
            for n in &numbers {
                let n = (n & 0x3ff) + 1;
                expected.push(n);
                let s = format!("{} PRINT 0", n);
                if program.add(line(&s)).is_err() {
                    return false;
                }
            }
            expected.sort_unstable();
            expected.dedup();
            let mut seen: Vec<i32> = vec![];
            let mut cursor = 0;
            while let Some(next) = program.next_line(cursor) {
                seen.push(next);
                cursor = next;
            }
            seen == expected
        }
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop as fn(Vec<i32>) -> bool);
    }

    #[test]
    fn test_list_stays_sorted_under_churn() {
        fn prop(adds: Vec<i32>, removes: Vec<i32>) -> bool {
            let mut program = Program::new();
            for n in &adds {
                let n = (n & 0x3ff) + 1;
                let s = format!("{} PRINT 0", n);
                if program.add(line(&s)).is_err() {
                    return false;
                }
            }
            for n in &removes {
                program.remove((n & 0x3ff) + 1);
            }
            let numbers: Vec<i32> = program
                .list()
                .iter()
                .map(|s| s.split(':').next().unwrap().parse().unwrap())
                .collect();
            numbers.windows(2).all(|w| w[0] < w[1])
        }
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop as fn(Vec<i32>, Vec<i32>) -> bool);
    }
}
