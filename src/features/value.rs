// src/features/value.rs

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// One scalar feature on a device.
///
/// `Notes` is reserved for the `device_notes` feature: parent spec name →
/// the raw annotation that had no sub-label of its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`
    UInt(u64),
    Float(f64),
    Text(String),
    Notes(Map<String, Value>),
}

impl FeatureValue {
    /// Take a raw catalog value as-is. Anything deeper than a scalar is
    /// kept as its JSON text.
    pub fn from_raw(raw: &Value) -> Self {
        match raw {
            Value::Null      => FeatureValue::Null,
            Value::Bool(b)   => FeatureValue::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => FeatureValue::Int(i),
                (None, Some(u)) => FeatureValue::UInt(u),
                (None, None) => FeatureValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FeatureValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => FeatureValue::Text(raw.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_notes(&self) -> Option<&Map<String, Value>> {
        match self {
            FeatureValue::Notes(m) => Some(m),
            _ => None,
        }
    }
}

/// Flat text for delimited export and the GUI. Null and empty notes render empty.
impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Null     => Ok(()),
            FeatureValue::Bool(b)  => write!(f, "{b}"),
            FeatureValue::Int(i)   => write!(f, "{i}"),
            FeatureValue::UInt(u)  => write!(f, "{u}"),
            FeatureValue::Float(x) => write!(f, "{x}"),
            FeatureValue::Text(s)  => f.write_str(s),
            FeatureValue::Notes(m) if m.is_empty() => Ok(()),
            FeatureValue::Notes(m) => {
                let text = serde_json::to_string(m).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self { FeatureValue::Bool(b) }
}

impl From<i32> for FeatureValue {
    fn from(i: i32) -> Self { FeatureValue::Int(i64::from(i)) }
}

impl From<i64> for FeatureValue {
    fn from(i: i64) -> Self { FeatureValue::Int(i) }
}

impl From<u32> for FeatureValue {
    fn from(i: u32) -> Self { FeatureValue::Int(i64::from(i)) }
}

impl From<u64> for FeatureValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(FeatureValue::UInt(u), FeatureValue::Int)
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self { FeatureValue::Float(x) }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self { FeatureValue::Text(s!(s)) }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self { FeatureValue::Text(s) }
}

impl From<&Value> for FeatureValue {
    fn from(raw: &Value) -> Self { FeatureValue::from_raw(raw) }
}
