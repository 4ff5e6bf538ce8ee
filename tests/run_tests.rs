use treelox::error::LoxError;
use treelox::interpreter::Interpreter;
use treelox::{run, Outcome};

fn run_source(source: &str) -> (Outcome, String, Vec<LoxError>) {
    let mut interpreter = Interpreter::with_output(Vec::new());
    let mut errors: Vec<LoxError> = Vec::new();
    let outcome = run(source, &mut interpreter, &mut errors).unwrap();
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    (outcome, output, errors)
}

#[test]
fn completes_program() {
    let source = "
        // Arithmetic and strings.
        var greeting = \"hello\";
        var target = \"world\";
        print greeting + \" \" + target;
        var n = 10;
        print n / 4;
        print -n * 2 >= -20;
    ";
    let (outcome, output, errors) = run_source(source);
    assert_eq!(outcome, Outcome::Completed);
    assert!(errors.is_empty());
    assert_eq!(output, "hello world\n2.5\ntrue\n");
}

#[test]
fn syntax_error_prevents_execution() {
    let (outcome, output, errors) = run_source("print 1;\nprint 2 +;\nprint 3;");
    assert_eq!(outcome, Outcome::StaticError);
    assert_eq!(output, "");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "[line 2] Error at ';': Expect expression."
    );
}

#[test]
fn scan_error_prevents_parsing() {
    let (outcome, output, errors) = run_source("print \"unterminated;");
    assert_eq!(outcome, Outcome::StaticError);
    assert_eq!(output, "");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");
}

#[test]
fn runtime_error_outcome() {
    let (outcome, output, errors) = run_source("print \"a\";\nprint x;\nprint \"b\";");
    assert_eq!(outcome, Outcome::RuntimeError);
    assert_eq!(output, "a\n");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "Undefined variable 'x'.\n[line 2]");
}

#[test]
fn prompt_style_sessions_share_bindings() {
    let mut interpreter = Interpreter::with_output(Vec::new());
    let mut errors: Vec<LoxError> = Vec::new();
    assert_eq!(
        run("var count = 1;", &mut interpreter, &mut errors).unwrap(),
        Outcome::Completed
    );
    assert_eq!(
        run("var count = count + 1;", &mut interpreter, &mut errors).unwrap(),
        Outcome::Completed
    );
    assert_eq!(
        run("print count", &mut interpreter, &mut errors).unwrap(),
        Outcome::StaticError
    );
    assert_eq!(
        run("print count;", &mut interpreter, &mut errors).unwrap(),
        Outcome::Completed
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(interpreter.output(), b"2\n");
}
