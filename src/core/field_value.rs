//! Record values and the reserved record keys

use std::collections::BTreeMap;
use std::fmt;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MSG_KEY: &str = "msg";
pub const FILE_KEY: &str = "file";
pub const STACKTRACE_KEY: &str = "stacktrace";
pub const ERROR_KEY: &str = "error";

/// One log event as handed to a drinker. Built fresh for every log call.
pub type Record = BTreeMap<String, FieldValue>;

/// Value type for record fields
///
/// Drinkers only ever see these variants, so every value has a defined
/// rendering in both the line and the JSON format.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Message text of an error
    Error(String),
}

impl FieldValue {
    /// Capture the message text of `err`
    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        FieldValue::Error(err.to_string())
    }

    /// Text of string-like values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) | FieldValue::Error(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to `serde_json::Value`, or `None` for a non-finite float
    #[must_use]
    pub fn to_json_value(&self) -> Option<serde_json::Value> {
        let value = match self {
            FieldValue::String(s) | FieldValue::Error(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Value::Number(serde_json::Number::from_f64(*f)?),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        };
        Some(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) | FieldValue::Error(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
