use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

/// Type tag used when reporting argument type mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Integer,
    Double,
    String,
    Array,
    Object,
    Null,
}

impl ValueType {
    /// Tag of a dynamically typed JSON value
    ///
    /// Numbers without a fractional part that fit in 64 bits are integers,
    /// every other number is a double.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Double,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_of_json_values() {
        assert_eq!(ValueType::of(&json!(null)), ValueType::Null);
        assert_eq!(ValueType::of(&json!(true)), ValueType::Boolean);
        assert_eq!(ValueType::of(&json!(0)), ValueType::Integer);
        assert_eq!(ValueType::of(&json!(-7)), ValueType::Integer);
        assert_eq!(ValueType::of(&json!(u64::MAX)), ValueType::Integer);
        assert_eq!(ValueType::of(&json!(1.5)), ValueType::Double);
        assert_eq!(ValueType::of(&json!("s")), ValueType::String);
        assert_eq!(ValueType::of(&json!([1, 2])), ValueType::Array);
        assert_eq!(ValueType::of(&json!({"a": 1})), ValueType::Object);
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_value(ValueType::Double).unwrap(), json!("double"));
        let parsed: ValueType = serde_json::from_value(json!("integer")).unwrap();
        assert_eq!(parsed, ValueType::Integer);
        assert_eq!(parsed.to_string(), "integer");
    }
}
