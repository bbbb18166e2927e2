use super::ast::Statement;
use super::LineNumber;

/// One line of input and what the parser made of it. A numbered
/// line with a statement belongs in the program; a numbered line
/// without one is a deletion request; an unnumbered line is
/// executed directly.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
    statement: Option<Statement>,
}

impl Line {
    pub fn new(number: LineNumber, source: &str, statement: Option<Statement>) -> Line {
        let text = match number {
            Some(_) => source
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start()
                .to_string(),
            None => source.to_string(),
        };
        Line {
            number,
            text,
            statement,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn statement(&self) -> Option<&Statement> {
        self.statement.as_ref()
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{}: {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
