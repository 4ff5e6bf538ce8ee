use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;
use std::collections::BTreeMap;

/// The single, flat set of global bindings.
#[derive(Debug, Default)]
pub struct Environment {
    values: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            values: BTreeMap::new(),
        }
    }
    /// Binds `name`, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
    pub fn get(&self, token: &Token) -> Result<Value, RuntimeError> {
        match self.values.get(token.lexeme) {
            Some(x) => Ok(x.clone()),
            None => Err(RuntimeError::new(
                token,
                format!("Undefined variable '{}'.", token.lexeme),
            )),
        }
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod environment_tests {
    use super::Environment;
    use crate::token::{Token, TokenType};
    use crate::value::Value;

    fn name(lexeme: &str) -> Token {
        Token {
            tokentype: TokenType::Identifier,
            lexeme,
            line: 7,
        }
    }

    #[test]
    fn define_then_get() {
        let mut env = Environment::new();
        env.define("a", Value::Number(1.0));
        assert_eq!(env.get(&name("a")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn redefine_overwrites() {
        let mut env = Environment::new();
        env.define("a", Value::Number(1.0));
        env.define("a", Value::String("two".to_string()));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get(&name("a")), Ok(Value::String("two".to_string())));
    }

    #[test]
    fn undefined_variable() {
        let env = Environment::new();
        let err = env.get(&name("missing")).unwrap_err();
        assert_eq!(err.message, "Undefined variable 'missing'.");
        assert_eq!(err.line, 7);
        assert_eq!(err.lexeme, "missing");
        assert!(env.is_empty());
    }
}
