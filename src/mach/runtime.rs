use super::{Console, Operation, Program, Var};
use crate::error;
use crate::lang::ast::{Expression, Statement};
use crate::lang::{lex, parse, Error, Line, Operator};

type Result<T> = std::result::Result<T, Error>;

/// What an executed statement asks the run loop to do next.
/// Only the run loop interprets these.
#[derive(Debug, PartialEq)]
enum Flow {
    Next,
    Jump(i32),
    Halt,
}

/// ## Interpreter state
///
/// Owns the program, the variables, and the program counter.
/// One `enter` call handles one line of terminal input.
#[derive(Default)]
pub struct Runtime {
    program: Program,
    vars: Var,
    pc: Option<i32>,
    halted: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// One line of terminal input: a command, a program line to
    /// store or delete, or a statement to execute directly.
    pub fn enter(&mut self, source: &str, console: &mut dyn Console) -> Result<()> {
        match source {
            "LIST" => {
                for line in self.program.list() {
                    console.print(&line)?;
                }
                Ok(())
            }
            "RUN" => self.run(console),
            "CLEAR" => {
                self.clear();
                Ok(())
            }
            _ => self.enter_line(source, console),
        }
    }

    fn enter_line(&mut self, source: &str, console: &mut dyn Console) -> Result<()> {
        let tokens = lex(source);
        let line = parse(&tokens, source)?;
        match line.number() {
            Some(number) => match line.statement() {
                Some(_) => self.program.add(line),
                None => {
                    self.program.remove(number);
                    Ok(())
                }
            },
            None => match line.statement() {
                Some(statement) => match statement {
                    Statement::Let(..) | Statement::Print(..) | Statement::Input(..) => {
                        self.execute_immediate(statement, console)
                    }
                    Statement::Goto(..)
                    | Statement::If(..)
                    | Statement::Rem(..)
                    | Statement::End(..) => Err(error!(IllegalDirect, ..&statement.column())),
                },
                None => Err(error!(SyntaxError)),
            },
        }
    }

    /// Execute one statement outside the stored program. Control
    /// flow is discarded; jumping statements never get this far.
    pub fn execute_immediate(
        &mut self,
        statement: &Statement,
        console: &mut dyn Console,
    ) -> Result<()> {
        execute(&mut self.vars, statement, console)?;
        Ok(())
    }

    /// Execute the stored program from its first line.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.halted = false;
        self.pc = self.program.next_line(0);
        if self.pc.is_none() {
            return Ok(());
        }
        while !self.halted {
            let number = match self.pc {
                Some(number) => number,
                None => return Err(error!(InternalError; "LOST PROGRAM COUNTER")),
            };
            let statement = match self.program.get(number).and_then(Line::statement) {
                Some(statement) => statement,
                None => return Err(error!(InternalError, Some(number); "MISSING STATEMENT")),
            };
            let flow = execute(&mut self.vars, statement, console)
                .map_err(|error| error.in_line_number(Some(number)))?;
            match flow {
                Flow::Next => match self.program.next_line(number) {
                    Some(next) => self.pc = Some(next),
                    None => self.request_halt(),
                },
                Flow::Jump(target) => {
                    if let Err(error) = self.change_pc(target) {
                        return Err(error.in_line_number(Some(number)));
                    }
                }
                Flow::Halt => self.request_halt(),
            }
        }
        self.pc = None;
        Ok(())
    }

    /// Point the counter at `line`. The target must be a stored line.
    pub fn change_pc(&mut self, line: i32) -> Result<()> {
        if line <= 0 {
            return Err(error!(SyntaxError; "INVALID LINE NUMBER"));
        }
        if !self.program.has_line(line) {
            return Err(error!(UndefinedLine));
        }
        self.pc = Some(line);
        Ok(())
    }

    pub fn request_halt(&mut self) {
        self.halted = true;
    }

    /// Discard the program and all variables.
    pub fn clear(&mut self) {
        self.program.clear();
        self.vars.clear();
    }
}

fn execute(vars: &mut Var, statement: &Statement, console: &mut dyn Console) -> Result<Flow> {
    match statement {
        Statement::Let(_, name, expression) => {
            let value = evaluate(vars, expression)?;
            vars.store(name, value);
            Ok(Flow::Next)
        }
        Statement::Print(_, expression) => {
            let value = evaluate(vars, expression)?;
            console.print(&value.to_string())?;
            Ok(Flow::Next)
        }
        Statement::Input(_, name) => loop {
            let reply = match console.input(" ? ")? {
                Some(reply) => reply,
                None => return Err(error!(SyntaxError; "UNEXPECTED END OF INPUT")),
            };
            match read_number(&reply) {
                Some(value) => {
                    vars.store(name, value);
                    return Ok(Flow::Next);
                }
                None => console.print("INVALID NUMBER")?,
            }
        },
        Statement::Goto(_, target) => Ok(Flow::Jump(*target)),
        Statement::If(_, lhs, operator, rhs, target) => {
            let lhs = evaluate(vars, lhs)?;
            let rhs = evaluate(vars, rhs)?;
            if Operation::compare(operator, lhs, rhs)? {
                Ok(Flow::Jump(*target))
            } else {
                Ok(Flow::Next)
            }
        }
        Statement::Rem(..) => Ok(Flow::Next),
        Statement::End(_) => Ok(Flow::Halt),
    }
}

fn evaluate(vars: &Var, expression: &Expression) -> Result<i32> {
    match expression {
        Expression::Integer(_, value) => Ok(*value),
        Expression::Var(column, name) => match vars.fetch(name) {
            Ok(value) => Ok(value),
            Err(error) => Err(error.in_column(column)),
        },
        Expression::Binary(column, operator, lhs, rhs) => {
            let lhs = evaluate(vars, lhs)?;
            let rhs = evaluate(vars, rhs)?;
            let result = match operator {
                Operator::Plus => Operation::add(lhs, rhs),
                Operator::Minus => Operation::subtract(lhs, rhs),
                Operator::Multiply => Operation::multiply(lhs, rhs),
                Operator::Divide => Operation::divide(lhs, rhs),
                Operator::Equal | Operator::Greater | Operator::Less => {
                    Err(error!(InternalError; "UNSUPPORTED OPERATOR"))
                }
            };
            match result {
                Ok(value) => Ok(value),
                Err(error) => Err(error.in_column(column)),
            }
        }
    }
}

/// An optional minus sign, then digits, and nothing else. Values
/// outside i32 are rejected rather than wrapped.
fn read_number(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
