use crate::token::{Token, TokenType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {line}] Error: {message}")]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl ScanError {
    pub fn new(line: usize, message: &str) -> ScanError {
        ScanError {
            line,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl ParseError {
    pub fn at(token: &Token, message: &str) -> ParseError {
        let location = match token.tokentype {
            TokenType::EOF => " at end".to_string(),
            _ => format!(" at '{}'", token.lexeme),
        };
        ParseError {
            line: token.line,
            location,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}\n[line {line}]")]
pub struct RuntimeError {
    pub line: usize,
    pub lexeme: String,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: String) -> RuntimeError {
        RuntimeError {
            line: token.line,
            lexeme: token.lexeme.to_string(),
            message,
        }
    }
}

/// Any user-facing error the pipeline can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoxError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl LoxError {
    pub fn line(&self) -> usize {
        match self {
            LoxError::Scan(e) => e.line,
            LoxError::Parse(e) => e.line,
            LoxError::Runtime(e) => e.line,
        }
    }
    pub fn is_runtime(&self) -> bool {
        matches!(self, LoxError::Runtime(_))
    }
}

/// Sink for errors found while scanning, parsing or interpreting.
///
/// Formatting and exit status are the host's business; the pipeline only
/// hands errors over and keeps going (or stops) according to its own rules.
pub trait Reporter {
    fn report(&mut self, error: LoxError);
}

impl Reporter for Vec<LoxError> {
    fn report(&mut self, error: LoxError) {
        self.push(error);
    }
}

#[cfg(test)]
mod error_tests {
    use super::{LoxError, ParseError, Reporter, RuntimeError, ScanError};
    use crate::token::{Token, TokenType};

    #[test]
    fn error_formats() {
        let scan = ScanError::new(3, "Unexpected character.");
        assert_eq!(scan.to_string(), "[line 3] Error: Unexpected character.");

        let semicolon = Token {
            tokentype: TokenType::Semicolon,
            lexeme: ";",
            line: 2,
        };
        let parse = ParseError::at(&semicolon, "Expect expression.");
        assert_eq!(parse.to_string(), "[line 2] Error at ';': Expect expression.");

        let eof = Token {
            tokentype: TokenType::EOF,
            lexeme: "",
            line: 4,
        };
        let parse = ParseError::at(&eof, "Expect ';' after value.");
        assert_eq!(
            parse.to_string(),
            "[line 4] Error at end: Expect ';' after value."
        );

        let runtime = RuntimeError::new(&semicolon, "Operands must be numbers.".to_string());
        assert_eq!(runtime.to_string(), "Operands must be numbers.\n[line 2]");
    }

    #[test]
    fn vec_collects_reports() {
        let mut errors: Vec<LoxError> = Vec::new();
        errors.report(ScanError::new(1, "Unterminated string.").into());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line(), 1);
        assert!(!errors[0].is_runtime());
    }
}
