use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Nil,
    Number(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(x) => write!(f, "{}", x),
            Value::Number(x) => {
                if x.is_infinite() {
                    let sign = if x.is_sign_negative() { "-" } else { "" };
                    write!(f, "{}Infinity", sign)
                } else {
                    // f64's Display already drops a trailing ".0".
                    write!(f, "{}", x)
                }
            }
            Value::String(x) => write!(f, "{}", x),
        }
    }
}

impl Value {
    /// Only `nil` and `false` are falsey.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(x) => *x,
            Value::Nil => false,
            Value::Number(_) => true,
            Value::String(_) => true,
        }
    }
}
