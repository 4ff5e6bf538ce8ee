use crate::token::Token;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Binary {
        left: Box<Expression<'a>>,
        operator: &'a Token<'a>,
        right: Box<Expression<'a>>,
    },
    Grouping(Box<Expression<'a>>),
    Literal(Value),
    Unary {
        operator: &'a Token<'a>,
        right: Box<Expression<'a>>,
    },
    Variable(&'a Token<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Expression(Expression<'a>),
    Print(Expression<'a>),
    Var {
        name: &'a Token<'a>,
        initializer: Option<Expression<'a>>,
    },
}

/// A traversal over one family of nodes.
///
/// `accept` hands the node to the visitor, and the visitor's `visit` matches on
/// the concrete variant. Adding a traversal means one new impl; adding a
/// variant makes every impl's match non-exhaustive until it is handled.
pub trait Visitor<T, Output> {
    fn visit(&mut self, n: &T) -> Output;
}

impl<'a> Expression<'a> {
    pub fn accept<T, V>(&self, v: &mut V) -> T
    where
        V: Visitor<Expression<'a>, T> + ?Sized,
    {
        v.visit(self)
    }
}

impl<'a> Statement<'a> {
    pub fn accept<T, V>(&self, v: &mut V) -> T
    where
        V: Visitor<Statement<'a>, T> + ?Sized,
    {
        v.visit(self)
    }
}

/// Renders expressions in prefix form, e.g. `(* (- 123) (group 45.67))`.
#[derive(Default)]
pub struct AstPrinter {}

impl AstPrinter {
    pub fn print(&mut self, expr: &Expression) -> String {
        expr.accept(self)
    }
    fn parenthesize(&mut self, name: &str, args: &[&Expression]) -> String {
        let mut x = String::from("(");
        x.push_str(name);
        for arg in args {
            let rendered: String = arg.accept(self);
            x.push(' ');
            x.push_str(&rendered);
        }
        x.push(')');
        x
    }
}

impl<'a> Visitor<Expression<'a>, String> for AstPrinter {
    fn visit(&mut self, n: &Expression<'a>) -> String {
        match n {
            Expression::Binary {
                left,
                operator,
                right,
            } => self.parenthesize(operator.lexeme, &[left, right]),
            Expression::Grouping(x) => self.parenthesize("group", &[x]),
            Expression::Literal(x) => x.to_string(),
            Expression::Unary { operator, right } => {
                self.parenthesize(operator.lexeme, &[right])
            }
            Expression::Variable(x) => x.lexeme.to_string(),
        }
    }
}

#[cfg(test)]
mod ast_tests {
    use crate::ast::{AstPrinter, Expression};
    use crate::token::{Token, TokenType};
    use crate::value::Value;

    #[test]
    fn basic_ast_test() {
        let minus = Token {
            tokentype: TokenType::Minus,
            lexeme: "-",
            line: 1,
        };
        let star = Token {
            tokentype: TokenType::Star,
            lexeme: "*",
            line: 1,
        };
        let expression = Expression::Binary {
            left: Box::new(Expression::Unary {
                operator: &minus,
                right: Box::new(Expression::Literal(Value::Number(123.0))),
            }),
            operator: &star,
            right: Box::new(Expression::Grouping(Box::new(Expression::Literal(
                Value::Number(45.67),
            )))),
        };
        let mut printer = AstPrinter::default();
        assert_eq!(printer.print(&expression), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn literals_and_variables() {
        let name = Token {
            tokentype: TokenType::Identifier,
            lexeme: "answer",
            line: 1,
        };
        let bang = Token {
            tokentype: TokenType::Bang,
            lexeme: "!",
            line: 1,
        };
        let mut printer = AstPrinter::default();
        assert_eq!(printer.print(&Expression::Literal(Value::Nil)), "nil");
        assert_eq!(printer.print(&Expression::Literal(Value::Number(1.0))), "1");
        assert_eq!(printer.print(&Expression::Variable(&name)), "answer");
        let negated = Expression::Unary {
            operator: &bang,
            right: Box::new(Expression::Literal(Value::Boolean(true))),
        };
        assert_eq!(printer.print(&negated), "(! true)");
    }
}
