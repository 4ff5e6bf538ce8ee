use clap::{App, Arg};
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use treelox::error::{LoxError, Reporter};
use treelox::interpreter::Interpreter;
use treelox::Outcome;

/// Prints every error to stderr as soon as it is reported.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, error: LoxError) {
        eprintln!("{}", error);
    }
}

fn main() {
    let matches = App::new("treelox")
        .about("Runs a Lox script, or starts a prompt when no script is given")
        .arg(
            Arg::with_name("SCRIPT")
                .help("Path of the script to run")
                .index(1),
        )
        .get_matches();

    let result = match matches.value_of("SCRIPT") {
        Some(path) => run_file(path),
        None => run_prompt(),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(74);
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Could not read '{}': {}", path, e);
            process::exit(66);
        }
    };
    let mut interpreter = Interpreter::new();
    match treelox::run(&contents, &mut interpreter, &mut ConsoleReporter)? {
        Outcome::Completed => Ok(()),
        Outcome::StaticError => process::exit(65),
        Outcome::RuntimeError => process::exit(70),
    }
}

fn run_prompt() -> io::Result<()> {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        treelox::run(&line, &mut interpreter, &mut ConsoleReporter)?;
    }
}
