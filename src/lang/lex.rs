use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Lexer {
        chars: s.chars().peekable(),
        remark: false,
    }
    .collect();
    Lexer::close_remark(&mut tokens);
    tokens
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if self.remark {
            return Some(Token::Remark(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            let token = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = token {
                self.remark = true;
            }
            return token;
        }
        self.minutia()
    }
}

impl<'a> Lexer<'a> {
    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars.next();
            len += 1;
            if let Some(pk) = self.chars.peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Some(Token::Literal(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            let ch = pk.to_ascii_uppercase();
            if !is_basic_alphabetic(ch) && !is_basic_digit(ch) {
                break;
            }
            s.push(ch);
            self.chars.next();
        }
        match Token::from_string(&s) {
            Some(token) => Some(token),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars.next() {
            s.push(ch);
            if let Some(token) = Token::from_string(&s) {
                return Some(token);
            }
            match self.chars.peek() {
                Some(pk)
                    if !is_basic_alphabetic(*pk)
                        && !is_basic_digit(*pk)
                        && !is_basic_whitespace(*pk) => {}
                _ => break,
            }
        }
        Some(Token::Unknown(s))
    }

    // A line ending exactly at REM still carries an empty comment.
    fn close_remark(tokens: &mut Vec<Token>) {
        if let Some(Token::Word(Word::Rem)) = tokens.last() {
            tokens.push(Token::Remark(String::new()));
        }
    }
}
