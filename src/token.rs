use std::fmt;
use strum_macros::Display;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType<'a> {
    // Single-character tokens.
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    // One or two character tokens.
    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    // Literals.
    Identifier, String(&'a str), Number(f64),

    // Keywords.
    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EOF
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub tokentype: TokenType<'a>,
    pub lexeme: &'a str,
    pub line: usize,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tokentype, self.lexeme)?;
        match self.tokentype {
            TokenType::String(x) => write!(f, " {}", x),
            TokenType::Number(x) => write!(f, " {}", x),
            _ => Ok(()),
        }
    }
}
