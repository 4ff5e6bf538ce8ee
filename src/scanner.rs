use crate::error::{Reporter, ScanError};
use crate::token::{Token, TokenType};
use phf::phf_map;
use std::iter::Peekable;
use std::str::CharIndices;

// Note: current becomes self.iter.peek()?.0
struct Scanner<'a> {
    source: &'a str,
    iter: Peekable<CharIndices<'a>>,
    start: usize,
    line: usize,
}

/// Scans `source` into tokens, always ending with a single EOF token.
///
/// Lexical errors go to `reporter` and scanning carries on past them, so the
/// caller has to check the reporter before trusting the output.
pub fn scan_tokens<'a>(source: &'a str, reporter: &mut dyn Reporter) -> Vec<Token<'a>> {
    let mut scanner = Scanner {
        source,
        iter: source.char_indices().peekable(),
        start: 0,
        line: 1,
    };
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(&(idx, _)) = scanner.iter.peek() {
        scanner.start = idx;
        match scanner.scan_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => (),
            Err(e) => reporter.report(e.into()),
        }
    }
    tokens.push(Token {
        tokentype: TokenType::EOF,
        lexeme: "",
        line: scanner.line,
    });
    tokens
}

impl<'a> Scanner<'a> {
    fn scan_token(&mut self) -> Result<Option<Token<'a>>, ScanError> {
        let c = match self.iter.next() {
            Some((_, c)) => c,
            None => return Ok(None),
        };
        match c {
            '(' => Ok(Some(self.token(TokenType::LeftParen))),
            ')' => Ok(Some(self.token(TokenType::RightParen))),
            '{' => Ok(Some(self.token(TokenType::LeftBrace))),
            '}' => Ok(Some(self.token(TokenType::RightBrace))),
            ',' => Ok(Some(self.token(TokenType::Comma))),
            '.' => Ok(Some(self.token(TokenType::Dot))),
            '-' => Ok(Some(self.token(TokenType::Minus))),
            '+' => Ok(Some(self.token(TokenType::Plus))),
            ';' => Ok(Some(self.token(TokenType::Semicolon))),
            '*' => Ok(Some(self.token(TokenType::Star))),
            '!' => Ok(Some(self.either('=', TokenType::BangEqual, TokenType::Bang))),
            '=' => Ok(Some(self.either('=', TokenType::EqualEqual, TokenType::Equal))),
            '<' => Ok(Some(self.either('=', TokenType::LessEqual, TokenType::Less))),
            '>' => Ok(Some(self.either('=', TokenType::GreaterEqual, TokenType::Greater))),
            '/' => {
                if self.next_if('/') {
                    while let Some(&(_, c)) = self.iter.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.iter.next();
                    }
                    Ok(None)
                } else {
                    Ok(Some(self.token(TokenType::Slash)))
                }
            }
            ' ' | '\r' | '\t' => Ok(None),
            '\n' => {
                self.line += 1;
                Ok(None)
            }
            '"' => self.string().map(Some),
            '0'..='9' => self.number().map(Some),
            'a'..='z' | 'A'..='Z' | '_' => Ok(Some(self.identifier())),
            _ => Err(ScanError::new(self.line, "Unexpected character.")),
        }
    }
    fn current(&mut self) -> usize {
        match self.iter.peek() {
            None => self.source.len(),
            Some((idx, _)) => *idx,
        }
    }
    fn lexeme(&mut self) -> &'a str {
        let current = self.current();
        &self.source[self.start..current]
    }
    fn token(&mut self, tokentype: TokenType<'a>) -> Token<'a> {
        Token {
            tokentype,
            lexeme: self.lexeme(),
            line: self.line,
        }
    }
    fn either(
        &mut self,
        expected: char,
        matched: TokenType<'a>,
        otherwise: TokenType<'a>,
    ) -> Token<'a> {
        if self.next_if(expected) {
            self.token(matched)
        } else {
            self.token(otherwise)
        }
    }
    fn next_if(&mut self, expected: char) -> bool {
        self.iter.next_if(|&(_, c)| c == expected).is_some()
    }
    fn skip_digits(&mut self) {
        while self.iter.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}
    }
    fn string(&mut self) -> Result<Token<'a>, ScanError> {
        let opening_line = self.line;
        while let Some(&(_, c)) = self.iter.peek() {
            match c {
                '"' => break,
                '\n' => self.line += 1,
                _ => (),
            }
            self.iter.next();
        }
        if self.iter.next().is_none() {
            return Err(ScanError::new(opening_line, "Unterminated string."));
        }
        let lexeme = self.lexeme();
        Ok(self.token(TokenType::String(&lexeme[1..lexeme.len() - 1])))
    }
    fn number(&mut self) -> Result<Token<'a>, ScanError> {
        self.skip_digits();

        // A '.' only belongs to the number when a digit follows it.
        if let Some(&(_, '.')) = self.iter.peek() {
            let mut lookahead = self.iter.clone();
            lookahead.next();
            if let Some((_, c)) = lookahead.peek() {
                if c.is_ascii_digit() {
                    self.iter.next();
                    self.skip_digits();
                }
            }
        }

        let lexeme = self.lexeme();
        match lexeme.parse() {
            Ok(x) => Ok(self.token(TokenType::Number(x))),
            Err(_) => Err(ScanError::new(self.line, "Invalid number.")),
        }
    }
    fn identifier(&mut self) -> Token<'a> {
        while self
            .iter
            .next_if(|&(_, c)| c.is_ascii_alphanumeric() || c == '_')
            .is_some()
        {}
        match KEYWORDS.get(self.lexeme()) {
            None => self.token(TokenType::Identifier),
            Some(x) => self.token(x.clone()),
        }
    }
}

static KEYWORDS: phf::Map<&'static str, TokenType<'static>> = phf_map! {
    "and" => TokenType::And,
    "class" => TokenType::Class,
    "else" => TokenType::Else,
    "false" => TokenType::False,
    "for" => TokenType::For,
    "fun" => TokenType::Fun,
    "if" => TokenType::If,
    "nil" => TokenType::Nil,
    "or" => TokenType::Or,
    "print" => TokenType::Print,
    "return" => TokenType::Return,
    "super" => TokenType::Super,
    "this" => TokenType::This,
    "true" => TokenType::True,
    "var" => TokenType::Var,
    "while" => TokenType::While,
};
