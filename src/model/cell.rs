//! Single-value cells with value/JSON duality

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::coerce;
use super::matcher::Matcher;
use crate::error::{Error, Result};

/// A cell value stored as text
///
/// Plain cells hold the string form of a scalar. JSON cells hold the encoded
/// text of an array or object and decode back to that structure when
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    raw: String,
    is_json: bool,
}

impl Cell {
    /// Create a plain cell holding `raw` verbatim
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            is_json: false,
        }
    }

    /// Create a JSON cell from encoded array or object text
    pub fn json(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(_)) | Ok(Value::Object(_)) => Ok(Self { raw, is_json: true }),
            Ok(other) => Err(Error::InvalidJson {
                reason: format!("expected an array or object, got {}", json_kind(&other)),
            }),
            Err(e) => Err(Error::InvalidJson {
                reason: e.to_string(),
            }),
        }
    }

    /// Build a cell from any serializable value
    ///
    /// Arrays and objects are JSON-encoded; scalars are stringified.
    pub fn make<T: Serialize>(value: T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(Error::Encoding)?;
        Ok(Self::from(value))
    }

    pub fn is_json(&self) -> bool {
        self.is_json
    }

    pub fn value(&self) -> &str {
        &self.raw
    }

    /// The raw value, or `default` when the raw value is the empty string
    pub fn value_with_default<'a>(&'a self, default: &'a str) -> &'a str {
        if self.raw.is_empty() {
            default
        } else {
            &self.raw
        }
    }

    /// Compare against a literal value or run a predicate over the raw value
    pub fn equals<'m>(&self, matcher: impl Into<Matcher<'m>>) -> bool {
        self.matches(&matcher.into())
    }

    pub fn matches(&self, matcher: &Matcher<'_>) -> bool {
        matcher.is_match(&self.raw)
    }

    pub fn to_float(&self) -> f64 {
        coerce::to_float(&self.raw)
    }

    pub fn to_int(&self) -> i64 {
        coerce::to_int(&self.raw)
    }

    pub fn to_bool(&self) -> bool {
        coerce::to_bool(&self.raw)
    }

    /// Plain-value form used when the owning row or table is serialized
    pub fn to_value(&self) -> Value {
        if self.is_json {
            // Construction guarantees the text parses
            serde_json::from_str(&self.raw).unwrap_or_else(|_| Value::String(self.raw.clone()))
        } else {
            Value::String(self.raw.clone())
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(_) | Value::Object(_) => Self {
                raw: value.to_string(),
                is_json: true,
            },
            scalar => Self::new(scalar_to_string(&scalar)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// String form of a scalar under loose casting rules
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => bool_to_string(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => float_to_string(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn bool_to_string(b: bool) -> String {
    if b {
        "1".to_string()
    } else {
        String::new()
    }
}

/// String form of a float, shared by [`Cell::make`] and float matchers
///
/// Non-finite floats have no JSON form and encode as null, so they read as
/// the empty string on both paths.
pub(crate) fn float_to_string(f: f64) -> String {
    if !f.is_finite() {
        return String::new();
    }
    // Display drops a zero fraction: 1.0 -> "1"
    format!("{}", f)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use serde_json::json;

    #[test]
    fn test_plain_value() {
        let cell = Cell::new("hello");
        assert_eq!(cell.value(), "hello");
        assert!(!cell.is_json());
        assert_eq!(cell.to_string(), "hello");
    }

    #[test]
    fn test_equality() {
        let cell = Cell::new("abc");
        assert!(cell.equals("abc"));
        assert!(!cell.equals("abd"));
        assert!(cell.equals(&cell.clone()));
        assert!(cell.equals(Matcher::predicate(|v| v.starts_with('a'))));
        assert!(!cell.equals(Matcher::predicate(|v| v.is_empty())));
    }

    #[test]
    fn test_equality_with_scalars() {
        assert!(Cell::new("10").equals(10));
        assert!(Cell::new("1").equals(true));
        assert!(Cell::new("").equals(false));
        assert!(Cell::new("2.5").equals(2.5));
    }

    #[test]
    fn test_value_with_default() {
        assert_eq!(Cell::new("").value_with_default("n/a"), "n/a");
        assert_eq!(Cell::new("x").value_with_default("n/a"), "x");
        assert_eq!(Cell::new(" ").value_with_default("n/a"), " ");
    }

    #[test]
    fn test_make_from_scalar() {
        assert_eq!(Cell::make(10).unwrap().value(), "10");
        assert_eq!(Cell::make(1.0).unwrap().value(), "1");
        assert_eq!(Cell::make(1.5).unwrap().value(), "1.5");
        assert_eq!(Cell::make(true).unwrap().value(), "1");
        assert_eq!(Cell::make(false).unwrap().value(), "");
        assert_eq!(Cell::make(Value::Null).unwrap().value(), "");
        assert!(!Cell::make("x").unwrap().is_json());
    }

    #[test]
    fn test_make_non_finite_float() {
        assert_eq!(Cell::make(f64::INFINITY).unwrap().value(), "");
        assert_eq!(Cell::make(f64::NAN).unwrap().value(), "");
        assert!(Cell::make(f64::NEG_INFINITY).unwrap().equals(f64::NEG_INFINITY));
    }

    #[test]
    fn test_make_from_array() {
        let cell = Cell::make(["one", "two"]).unwrap();
        assert!(cell.is_json());
        assert_eq!(cell.value(), r#"["one","two"]"#);
    }

    #[test]
    fn test_make_keeps_key_order() {
        let cell = Cell::make(json!({"b": "1", "a": "2"})).unwrap();
        assert_eq!(cell.value(), r#"{"b":"1","a":"2"}"#);
        assert_eq!(cell.to_value(), json!({"b": "1", "a": "2"}));
    }

    #[test]
    fn test_make_unencodable() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "tuple keys have no JSON form");
        assert!(matches!(Cell::make(&map), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_json_constructor() {
        let cell = Cell::json(r#"{"k":"v"}"#).unwrap();
        assert!(cell.is_json());
        assert!(matches!(Cell::json("\"str\""), Err(Error::InvalidJson { .. })));
        assert!(matches!(Cell::json("{"), Err(Error::InvalidJson { .. })));
    }

    #[test]
    fn test_serialize() {
        let plain = Cell::new("x");
        assert_eq!(serde_json::to_string(&plain).unwrap(), r#""x""#);

        let encoded = r#"{"a":"b"}"#;
        let json_cell = Cell::json(encoded).unwrap();
        assert_eq!(serde_json::to_string(&json_cell).unwrap(), encoded);
    }

    #[test]
    fn test_coercions() {
        let cell = Cell::new("3.7 apples");
        assert_eq!(cell.to_float(), 3.7);
        assert_eq!(cell.to_int(), 3);
        assert!(cell.to_bool());
        assert!(!Cell::new("0").to_bool());
        assert_eq!(Cell::new("abc").to_int(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let cell = Cell::new("");
        let cloned = cell.clone();
        assert_eq!(cell, cloned);
        assert!(!std::ptr::eq(&cell, &cloned));
    }
}
