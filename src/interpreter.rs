use crate::ast::{Expression, Statement, Visitor};
use crate::environment::Environment;
use crate::error::{Reporter, RuntimeError};
use crate::token::{Token, TokenType};
use crate::value::Value;
use std::io::{self, Write};
use thiserror::Error;

/// Why executing a statement stopped early.
#[derive(Debug, Error)]
pub enum Interrupt {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing `print` output failed. Not a Lox error; the host deals with it.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Interpreter<W: Write = io::Stdout> {
    pub environment: Environment,
    out: W,
}

impl<'a, W: Write> Visitor<Expression<'a>, Result<Value, RuntimeError>> for Interpreter<W> {
    fn visit(&mut self, expr: &Expression<'a>) -> Result<Value, RuntimeError> {
        match expr {
            Expression::Literal(x) => Ok(x.clone()),
            Expression::Grouping(x) => self.evaluate(x),
            Expression::Unary { operator, right } => {
                let rv = self.evaluate(right)?;
                match operator.tokentype {
                    TokenType::Minus => Ok(Value::Number(-number_operand(operator, &rv)?)),
                    TokenType::Bang => Ok(Value::Boolean(!rv.is_truthy())),
                    _ => Ok(Value::Nil),
                }
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                let lv = self.evaluate(left)?;
                let rv = self.evaluate(right)?;
                binary(operator, lv, rv)
            }
            Expression::Variable(token) => self.environment.get(token),
        }
    }
}

impl<'a, W: Write> Visitor<Statement<'a>, Result<(), Interrupt>> for Interpreter<W> {
    fn visit(&mut self, stmt: &Statement<'a>) -> Result<(), Interrupt> {
        match stmt {
            Statement::Print(e) => {
                let val = self.evaluate(e)?;
                writeln!(self.out, "{}", val)?;
            }
            Statement::Expression(e) => {
                self.evaluate(e)?;
            }
            Statement::Var { name, initializer } => {
                let val = match initializer {
                    Some(x) => self.evaluate(x)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme, val);
            }
        }
        Ok(())
    }
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// An interpreter whose `print` output goes to `out`.
    pub fn with_output(out: W) -> Interpreter<W> {
        Interpreter {
            environment: Environment::new(),
            out,
        }
    }
    pub fn output(&self) -> &W {
        &self.out
    }
    pub fn into_output(self) -> W {
        self.out
    }
    fn evaluate(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
        expr.accept(self)
    }
    pub fn execute(&mut self, stmt: &Statement) -> Result<(), Interrupt> {
        stmt.accept(self)
    }
    /// Runs `statements` in order. The first runtime error is reported and
    /// skips everything after it; bindings made before it are kept.
    pub fn interpret(
        &mut self,
        statements: &[Statement],
        reporter: &mut dyn Reporter,
    ) -> io::Result<()> {
        for stmt in statements {
            match self.execute(stmt) {
                Ok(()) => (),
                Err(Interrupt::Runtime(e)) => {
                    reporter.report(e.into());
                    break;
                }
                Err(Interrupt::Io(e)) => return Err(e),
            }
        }
        self.out.flush()
    }
}

fn number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(x) => Ok(*x),
        _ => Err(RuntimeError::new(
            operator,
            "Operand must be a number.".to_string(),
        )),
    }
}

fn number_operands(operator: &Token, lv: &Value, rv: &Value) -> Result<(f64, f64), RuntimeError> {
    match (lv, rv) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError::new(
            operator,
            "Operands must be numbers.".to_string(),
        )),
    }
}

fn binary(operator: &Token, lv: Value, rv: Value) -> Result<Value, RuntimeError> {
    match operator.tokentype {
        TokenType::EqualEqual => Ok(Value::Boolean(lv == rv)),
        TokenType::BangEqual => Ok(Value::Boolean(lv != rv)),
        TokenType::Plus => match (lv, rv) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => {
                let mut joined = l;
                joined.push_str(r.as_str());
                Ok(Value::String(joined))
            }
            _ => Err(RuntimeError::new(
                operator,
                "Operands must be two numbers or two strings.".to_string(),
            )),
        },
        _ => {
            let (l, r) = number_operands(operator, &lv, &rv)?;
            match operator.tokentype {
                TokenType::Minus => Ok(Value::Number(l - r)),
                TokenType::Slash => Ok(Value::Number(l / r)),
                TokenType::Star => Ok(Value::Number(l * r)),
                TokenType::Greater => Ok(Value::Boolean(l > r)),
                TokenType::GreaterEqual => Ok(Value::Boolean(l >= r)),
                TokenType::Less => Ok(Value::Boolean(l < r)),
                TokenType::LessEqual => Ok(Value::Boolean(l <= r)),
                _ => Ok(Value::Nil),
            }
        }
    }
}
