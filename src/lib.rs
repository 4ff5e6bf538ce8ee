pub mod ast;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod value;

use crate::error::{LoxError, Reporter};
use crate::interpreter::Interpreter;
use std::io::{self, Write};

/// How a call to [`run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Scanning or parsing reported errors; nothing was executed.
    StaticError,
    RuntimeError,
}

/// Passes reports through while remembering what kind of errors were seen.
struct Tally<'r> {
    inner: &'r mut dyn Reporter,
    static_errors: usize,
    runtime_errors: usize,
}

impl<'r> Reporter for Tally<'r> {
    fn report(&mut self, error: LoxError) {
        if error.is_runtime() {
            self.runtime_errors += 1;
        } else {
            self.static_errors += 1;
        }
        self.inner.report(error);
    }
}

/// Scans, parses and interprets `source`. Interpretation is skipped when
/// scanning or parsing reported anything.
pub fn run<W: Write>(
    source: &str,
    interpreter: &mut Interpreter<W>,
    reporter: &mut dyn Reporter,
) -> io::Result<Outcome> {
    let mut tally = Tally {
        inner: reporter,
        static_errors: 0,
        runtime_errors: 0,
    };
    let tokens = scanner::scan_tokens(source, &mut tally);
    if tally.static_errors > 0 {
        return Ok(Outcome::StaticError);
    }
    let statements = parser::parse(&tokens, &mut tally);
    if tally.static_errors > 0 {
        return Ok(Outcome::StaticError);
    }
    interpreter.interpret(&statements, &mut tally)?;
    if tally.runtime_errors > 0 {
        Ok(Outcome::RuntimeError)
    } else {
        Ok(Outcome::Completed)
    }
}
