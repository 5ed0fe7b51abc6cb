//! Runtime-shaped input to the literal compiler.
//!
//! [`Value`] mirrors the data a macro host computes at expansion time before
//! it is serialized back into source form. Object entries are ordered pairs
//! so the compiled literal preserves key insertion order.

use serde::{Deserialize, Serialize};

/// A runtime-shaped value, as handed over by the macro host.
///
/// `Undefined` and `Function` have no literal grammar form; the literal
/// compiler renders both as `void 0`. Keys bound to `Undefined` inside an
/// object are omitted from the compiled literal entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    Null,
    #[default]
    Undefined,
    Bool(bool),
    Num(f64),
    Str(String),
    /// An opaque function value; only its `void 0` rendering survives.
    Function,
    Array(Vec<Value>),
    /// Ordered key/value pairs; insertion order is significant.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Undefined => "Undefined",
            Value::Bool(_) => "Bool",
            Value::Num(_) => "Num",
            Value::Str(_) => "Str",
            Value::Function => "Function",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Builds an object value from ordered key/value pairs.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
