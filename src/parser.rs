use crate::ast::{Expression, Statement};
use crate::error::{ParseError, Reporter};
use crate::token::{Token, TokenType};
use crate::value::Value;

/// Parses a full program. Each malformed declaration is reported, skipped up to
/// the next statement boundary and left out of the result.
pub fn parse<'a>(tokens: &'a [Token<'a>], reporter: &mut dyn Reporter) -> Vec<Statement<'a>> {
    let mut statements: Vec<Statement<'a>> = Vec::new();
    if tokens.is_empty() {
        return statements;
    }
    let mut parser = Parser::new(tokens);
    while !parser.is_at_end() {
        match parser.declaration() {
            Ok(stmt) => statements.push(stmt),
            Err(e) => {
                reporter.report(e.into());
                parser.synchronize();
            }
        }
    }
    statements
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Parser<'a> {
        Parser { tokens, current: 0 }
    }
    fn declaration(&mut self) -> Result<Statement<'a>, ParseError> {
        match self.peek().tokentype {
            TokenType::Var => {
                self.advance();
                self.var_declaration()
            }
            _ => self.statement(),
        }
    }
    fn var_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
        let name = self.consume(&TokenType::Identifier, "Expect variable name.")?;
        let initializer = match self.peek().tokentype {
            TokenType::Equal => {
                self.advance();
                Some(self.expression()?)
            }
            _ => None,
        };
        self.consume(
            &TokenType::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Statement::Var { name, initializer })
    }
    fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
        match self.peek().tokentype {
            TokenType::Print => {
                self.advance();
                self.print_statement()
            }
            _ => self.expression_statement(),
        }
    }
    fn print_statement(&mut self) -> Result<Statement<'a>, ParseError> {
        let expr = self.expression()?;
        self.consume(&TokenType::Semicolon, "Expect ';' after value.")?;
        Ok(Statement::Print(expr))
    }
    fn expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
        let expr = self.expression()?;
        self.consume(&TokenType::Semicolon, "Expect ';' after expression.")?;
        Ok(Statement::Expression(expr))
    }
    fn expression(&mut self) -> Result<Expression<'a>, ParseError> {
        self.equality()
    }
    fn equality(&mut self) -> Result<Expression<'a>, ParseError> {
        let mut expr = self.comparison()?;
        while let TokenType::BangEqual | TokenType::EqualEqual = self.peek().tokentype {
            let operator = self.advance();
            let right = self.comparison()?;
            expr = binary(expr, operator, right);
        }
        Ok(expr)
    }
    fn comparison(&mut self) -> Result<Expression<'a>, ParseError> {
        let mut expr = self.term()?;
        while let TokenType::Greater
        | TokenType::GreaterEqual
        | TokenType::Less
        | TokenType::LessEqual = self.peek().tokentype
        {
            let operator = self.advance();
            let right = self.term()?;
            expr = binary(expr, operator, right);
        }
        Ok(expr)
    }
    fn term(&mut self) -> Result<Expression<'a>, ParseError> {
        let mut expr = self.factor()?;
        while let TokenType::Minus | TokenType::Plus = self.peek().tokentype {
            let operator = self.advance();
            let right = self.factor()?;
            expr = binary(expr, operator, right);
        }
        Ok(expr)
    }
    fn factor(&mut self) -> Result<Expression<'a>, ParseError> {
        let mut expr = self.unary()?;
        while let TokenType::Slash | TokenType::Star = self.peek().tokentype {
            let operator = self.advance();
            let right = self.unary()?;
            expr = binary(expr, operator, right);
        }
        Ok(expr)
    }
    fn unary(&mut self) -> Result<Expression<'a>, ParseError> {
        match self.peek().tokentype {
            TokenType::Bang | TokenType::Minus => {
                let operator = self.advance();
                let right = self.unary()?;
                Ok(Expression::Unary {
                    operator,
                    right: Box::new(right),
                })
            }
            _ => self.primary(),
        }
    }
    fn primary(&mut self) -> Result<Expression<'a>, ParseError> {
        let token = self.peek();
        let literal = match token.tokentype {
            TokenType::False => Value::Boolean(false),
            TokenType::True => Value::Boolean(true),
            TokenType::Nil => Value::Nil,
            TokenType::Number(x) => Value::Number(x),
            TokenType::String(x) => Value::String(x.to_string()),
            TokenType::Identifier => {
                self.advance();
                return Ok(Expression::Variable(token));
            }
            TokenType::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(&TokenType::RightParen, "Expect ')' after expression.")?;
                return Ok(Expression::Grouping(Box::new(expr)));
            }
            _ => return Err(ParseError::at(token, "Expect expression.")),
        };
        self.advance();
        Ok(Expression::Literal(literal))
    }
    /// Discards tokens until just past a ';' or up to a token that starts a
    /// new statement.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if let TokenType::Semicolon = self.previous().tokentype {
                return;
            }
            match self.peek().tokentype {
                TokenType::Class
                | TokenType::Fun
                | TokenType::Var
                | TokenType::For
                | TokenType::If
                | TokenType::While
                | TokenType::Print
                | TokenType::Return => return,
                _ => (),
            }
            self.advance();
        }
    }
    fn consume(
        &mut self,
        expected: &TokenType,
        message: &str,
    ) -> Result<&'a Token<'a>, ParseError> {
        if self.peek().tokentype == *expected {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.peek(), message))
        }
    }
    fn advance(&mut self) -> &'a Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }
    fn is_at_end(&self) -> bool {
        matches!(self.peek().tokentype, TokenType::EOF)
    }
    /// Never runs past the last token, which is EOF for scanner output.
    fn peek(&self) -> &'a Token<'a> {
        let tokens: &'a [Token<'a>] = self.tokens;
        &tokens[self.current.min(tokens.len() - 1)]
    }
    fn previous(&self) -> &'a Token<'a> {
        let tokens: &'a [Token<'a>] = self.tokens;
        &tokens[self.current.saturating_sub(1)]
    }
}

fn binary<'a>(left: Expression<'a>, operator: &'a Token<'a>, right: Expression<'a>) -> Expression<'a> {
    Expression::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}
