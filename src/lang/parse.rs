use super::{ast::*, token::*, Column, Error, Line, LineNumber};
use std::num::IntErrorKind;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token], source: &str) -> Result<Line> {
    Parser::parse(tokens, source)
}

fn literal(text: &str) -> Result<i32> {
    match text.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(error!(Overflow)),
            _ => Err(error!(SyntaxError; "EXPECTED NUMBER")),
        },
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    parens: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token], source: &str) -> Result<Line> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            parens: 0,
        };
        let number: LineNumber = match parse.peek() {
            Some(Token::Literal(_)) => match parse.line_number() {
                Ok(number) => Some(number),
                Err(error) => return Err(error.in_column(&parse.col)),
            },
            _ => None,
        };
        if number.is_some() && parse.peek().is_none() {
            return Ok(Line::new(number, source, None));
        }
        match parse.statement() {
            Ok(statement) => Ok(Line::new(number, source, Some(statement))),
            Err(error) => Err(error.in_column(&parse.col).in_line_number(number)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, word),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn line_number(&mut self) -> Result<i32> {
        match self.next() {
            Some(Token::Literal(text)) => literal(text),
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn ident(&mut self) -> Result<Rc<str>> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(Rc::from(name.as_str())),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    this.parens += 1;
                    let expr = this.expression()?;
                    match this.next() {
                        Some(Token::RParen) => {}
                        _ => return Err(error!(SyntaxError; "MISMATCHED PARENTHESIS")),
                    }
                    this.parens -= 1;
                    expr
                }
                Some(Token::Ident(name)) => {
                    Expression::Var(this.column(), Rc::from(name.as_str()))
                }
                Some(Token::Literal(text)) => Expression::Integer(this.column(), literal(text)?),
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                match this.peek() {
                    Some(Token::RParen) => {
                        if this.parens == 0 {
                            return Err(error!(SyntaxError; "MISMATCHED PARENTHESIS"));
                        }
                        break;
                    }
                    Some(Token::Operator(operator)) => {
                        let op_precedence = Expression::op_precedence(operator);
                        if op_precedence < precedence {
                            break;
                        }
                        let operator = operator.clone();
                        this.next();
                        let column = this.column();
                        let rhs = parse(this, op_precedence + 1)?;
                        lhs = Expression::Binary(column, operator, Box::new(lhs), Box::new(rhs));
                    }
                    _ => break,
                }
            }
            Ok(lhs)
        }
        parse(self, 1)
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) | Remark(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }
}

impl Expression {
    // Relational operators never bind inside an expression. IF
    // splits its condition on them at precedence zero.
    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal | Greater | Less => 0,
            Plus | Minus => 1,
            Multiply | Divide => 2,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Let => Self::r#let(parse, column),
            Print => Self::r#print(parse, column),
            Input => Self::input(parse, column),
            Goto => Self::r#goto(parse, column),
            If => Self::r#if(parse, column),
            Rem => Self::rem(parse, column),
            End => Self::end(parse, column),
            Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let name = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, name, expr))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Print(column, parse.expression()?))
    }

    fn input(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Input(column, parse.ident()?))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let lhs = parse.expression()?;
        let operator = match parse.next() {
            Some(Token::Operator(operator)) => match operator {
                Operator::Equal | Operator::Greater | Operator::Less => operator.clone(),
                _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
            },
            _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
        };
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(column, lhs, operator, rhs, target))
    }

    fn rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        match parse.next() {
            Some(Token::Remark(text)) => Ok(Statement::Rem(column, text.clone())),
            _ => Err(error!(SyntaxError; "EXPECTED REMARK")),
        }
    }

    fn end(_parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::End(column))
    }
}
