//! Value types for point fields and query result cells.

use ordered_float::OrderedFloat;

/// A field value in a point written to InfluxDB.
///
/// InfluxDB 1.x field values are dynamically typed; this enum covers the
/// kinds this facade writes: strings, signed 64-bit integers, and 64-bit
/// floats.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// String value.
    String(String),

    /// Signed 64-bit integer.
    Integer(i64),

    /// 64-bit floating point value.
    Float(f64),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

/// Represents a cell value in an InfluxDB query result.
///
/// The 1.x `/query` endpoint returns JSON, so result cells are strings,
/// numbers, booleans, or null. Integral JSON numbers decode as `Integer`;
/// everything else numeric decodes as `Float`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// String value.
    String(String),

    /// 64-bit floating point value.
    Float(OrderedFloat<f64>),

    /// Signed 64-bit integer.
    Integer(i64),

    /// Boolean value.
    Bool(bool),

    /// Null value.
    Null,
}

impl Value {
    /// Returns the value as a string reference if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an owned string if it is a `String` variant.
    pub fn string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns the value as a f64 if it is a `Float` variant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(f.into_inner()),
            _ => None,
        }
    }

    /// Returns the value as an i64 if it is an `Integer` variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a bool if it is a `Bool` variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(OrderedFloat::from(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Null => Value::Null,
            // Arrays/objects never appear in 1.x result cells; keep the raw
            // text rather than dropping the cell.
            other => Value::String(other.to_string()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(v) => write!(f, "{}", v),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Value accessor tests
    // =========================================================================

    #[test]
    fn test_as_str() {
        let v = Value::String("hello".to_string());
        assert_eq!(v.as_str(), Some("hello"));

        // Wrong type returns None
        assert_eq!(Value::Integer(42).as_str(), None);
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_string() {
        let v = Value::String("hello".to_string());
        assert_eq!(v.string(), Some("hello".to_string()));

        assert_eq!(Value::Integer(42).string(), None);
        assert_eq!(Value::Null.string(), None);
    }

    #[test]
    fn test_as_float() {
        let v = Value::Float(OrderedFloat::from(2.72));
        assert_eq!(v.as_float(), Some(2.72));

        assert_eq!(Value::Integer(42).as_float(), None);
        assert_eq!(Value::String("2.72".to_string()).as_float(), None);
        assert_eq!(Value::Null.as_float(), None);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Value::Integer(42).as_integer(), Some(42));
        assert_eq!(Value::Integer(-100).as_integer(), Some(-100));
        assert_eq!(Value::Integer(i64::MAX).as_integer(), Some(i64::MAX));

        assert_eq!(Value::Float(OrderedFloat::from(42.0)).as_integer(), None);
        assert_eq!(Value::Null.as_integer(), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));

        assert_eq!(Value::Integer(1).as_bool(), None);
        assert_eq!(Value::String("true".to_string()).as_bool(), None);
        assert_eq!(Value::Null.as_bool(), None);
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());

        assert!(!Value::String("".to_string()).is_null());
        assert!(!Value::Integer(0).is_null());
        assert!(!Value::Bool(false).is_null());
        assert!(!Value::Float(OrderedFloat::from(0.0)).is_null());
    }

    // =========================================================================
    // JSON conversion tests
    // =========================================================================

    #[test]
    fn test_from_json_string() {
        let v: Value = serde_json::json!("cpu").into();
        assert_eq!(v, Value::String("cpu".to_string()));
    }

    #[test]
    fn test_from_json_integer() {
        let v: Value = serde_json::json!(42).into();
        assert_eq!(v, Value::Integer(42));
    }

    #[test]
    fn test_from_json_float() {
        let v: Value = serde_json::json!(0.64).into();
        assert_eq!(v, Value::Float(OrderedFloat::from(0.64)));
    }

    #[test]
    fn test_from_json_bool_and_null() {
        let v: Value = serde_json::json!(true).into();
        assert_eq!(v, Value::Bool(true));

        let v: Value = serde_json::Value::Null.into();
        assert_eq!(v, Value::Null);
    }

    // =========================================================================
    // Value Display tests
    // =========================================================================

    #[test]
    fn test_display() {
        assert_eq!(Value::String("hello world".to_string()).to_string(), "hello world");
        assert_eq!(Value::Integer(-100).to_string(), "-100");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "null");
        assert!(Value::Float(OrderedFloat::from(1.23456)).to_string().starts_with("1.23"));
    }

    // =========================================================================
    // FieldValue conversion tests
    // =========================================================================

    #[test]
    fn test_field_value_from() {
        assert_eq!(FieldValue::from("idle"), FieldValue::String("idle".to_string()));
        assert_eq!(FieldValue::from(7i64), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(7i32), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(0.5), FieldValue::Float(0.5));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::String("a".to_string()), Value::String("a".to_string()));
        assert_ne!(Value::String("a".to_string()), Value::String("b".to_string()));

        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_ne!(Value::Integer(42), Value::Integer(43));

        assert_eq!(Value::Null, Value::Null);

        // Different types are not equal
        assert_ne!(Value::Integer(42), Value::Float(OrderedFloat::from(42.0)));
        assert_ne!(Value::String("42".to_string()), Value::Integer(42));
    }
}
