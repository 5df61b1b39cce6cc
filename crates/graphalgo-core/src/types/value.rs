//! Dynamically typed parameter values

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw parameter map as handed over by the procedure layer
pub type ParamMap = HashMap<String, ParamValue>;

/// A single untyped parameter value
///
/// Integers and floats are kept apart so integer reads stay exact. `Null`
/// means "sent without a value" and reads as absent everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ParamValue>),
    Map(ParamMap),
}

impl ParamValue {
    /// Stable lowercase name of the runtime type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Integer(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
            ParamValue::List(_) => "list",
            ParamValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric value as a float; integers widen
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(i) => Some(*i as f64),
            ParamValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric value as an integer; floats truncate toward zero
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(i) => Some(*i),
            ParamValue::Float(f) => Some(f.trunc() as i64),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            ParamValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ParamValue::Null,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ParamValue::Integer(i),
                None => ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ParamValue::String(s),
            Value::Array(items) => ParamValue::List(items.into_iter().map(ParamValue::from).collect()),
            Value::Object(fields) => ParamValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(value: ParamMap) -> Self {
        ParamValue::Map(value)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(value: Vec<ParamValue>) -> Self {
        ParamValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_integers_exact() {
        let value = ParamValue::from(json!({
            "iterations": 20,
            "dampingFactor": 0.85,
            "write": true,
            "graph": "huge",
            "params": {"limit": 10},
            "ids": [1, 2],
            "missing": null,
        }));

        let map = value.as_map().unwrap();
        assert_eq!(map["iterations"], ParamValue::Integer(20));
        assert_eq!(map["dampingFactor"], ParamValue::Float(0.85));
        assert_eq!(map["write"], ParamValue::Bool(true));
        assert_eq!(map["graph"].as_str(), Some("huge"));
        assert_eq!(map["params"].as_map().unwrap()["limit"], ParamValue::Integer(10));
        assert_eq!(map["ids"], ParamValue::List(vec![ParamValue::Integer(1), ParamValue::Integer(2)]));
        assert!(map["missing"].is_null());
    }

    #[test]
    fn test_no_coercion_between_strings_and_numbers() {
        let value = ParamValue::from("10");
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_f64(), None);
        assert_eq!(ParamValue::from(10).as_str(), None);
    }

    #[test]
    fn test_float_truncates_to_integer() {
        assert_eq!(ParamValue::from(2.9).as_i64(), Some(2));
        assert_eq!(ParamValue::from(-2.9).as_i64(), Some(-2));
        assert_eq!(ParamValue::from(3).as_f64(), Some(3.0));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ParamValue::Null.type_name(), "null");
        assert_eq!(ParamValue::from(true).type_name(), "boolean");
        assert_eq!(ParamValue::from(1).type_name(), "integer");
        assert_eq!(ParamValue::from(1.5).type_name(), "float");
        assert_eq!(ParamValue::from("x").type_name(), "string");
        assert_eq!(ParamValue::from(ParamMap::new()).type_name(), "map");
    }

    #[test]
    fn test_untagged_deserialize() {
        let map: ParamMap = serde_json::from_str(r#"{"batchSize": 500, "direction": "OUTGOING"}"#).unwrap();
        assert_eq!(map["batchSize"], ParamValue::Integer(500));
        assert_eq!(map["direction"], ParamValue::String("OUTGOING".to_string()));
    }
}
