//! Value types for binding environments.
//!
//! Values are what a variable holds while a rewrite is evaluated: text and
//! lists of text come from matched URLs, numbers and booleans come from
//! pipeline literals and function results.

use std::fmt;

/// A value bound to a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single piece of text.
    Text(String),
    /// A list of text, produced by repeating path segments.
    List(Vec<String>),
    /// A non-fractional number.
    Number(i64),
    /// Boolean value.
    Bool(bool),
}

/// Textual rendering, as used when values are written into URLs or
/// concatenated. Lists join their items with `,`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::List(items) => write!(f, "{}", items.join(",")),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Type alias for a plain name-to-value map.
pub type Values = std::collections::HashMap<String, Value>;

/// Helper macro to create value maps.
#[macro_export]
macro_rules! values {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
