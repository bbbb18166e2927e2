#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    Remark(String),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        use Operator::*;
        use Word::*;
        match s {
            "LET" => Some(Token::Word(Let)),
            "PRINT" => Some(Token::Word(Print)),
            "INPUT" => Some(Token::Word(Input)),
            "GOTO" => Some(Token::Word(Goto)),
            "IF" => Some(Token::Word(If)),
            "THEN" => Some(Token::Word(Then)),
            "REM" => Some(Token::Word(Rem)),
            "END" => Some(Token::Word(End)),
            "+" => Some(Token::Operator(Plus)),
            "-" => Some(Token::Operator(Minus)),
            "*" => Some(Token::Operator(Multiply)),
            "/" => Some(Token::Operator(Divide)),
            "=" => Some(Token::Operator(Equal)),
            ">" => Some(Token::Operator(Greater)),
            "<" => Some(Token::Operator(Less)),
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Let,
    Print,
    Input,
    Goto,
    If,
    Then,
    Rem,
    End,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            Rem => write!(f, "REM"),
            End => write!(f, "END"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Greater,
    Less,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
        }
    }
}
