use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::ValueType;

/// Constraints an argument value must satisfy once its type is correct
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArgumentRules {
    /// Minimum length of a string (characters) or array (items)
    pub min_length: Option<usize>,
    /// Maximum length of a string (characters) or array (items)
    pub max_length: Option<usize>,
    /// Smallest accepted number
    pub minimum: Option<f64>,
    /// Largest accepted number
    pub maximum: Option<f64>,
    /// Exhaustive list of accepted values
    #[schema(value_type = Option<Vec<Object>>)]
    pub one_of: Option<Vec<Value>>,
}

/// Whether a value of type `given` is acceptable where `expected` is required
///
/// Integers are accepted where doubles are expected.
pub fn type_matches(expected: ValueType, given: ValueType) -> bool {
    expected == given || (expected == ValueType::Double && given == ValueType::Integer)
}

/// JSON equality, except that numbers compare by numeric value (`1 == 1.0`)
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_f64() || y.is_f64() => {
            x.as_f64() == y.as_f64()
        }
        _ => a == b,
    }
}

impl ArgumentRules {
    /// Human-readable list of every rule `value` breaks, in declaration order
    pub fn violations(&self, value: &Value) -> Vec<String> {
        let mut violations = Vec::new();

        let length = match value {
            Value::String(s) => Some((s.chars().count(), "characters")),
            Value::Array(items) => Some((items.len(), "items")),
            _ => None,
        };

        if let Some((len, unit)) = length {
            if let Some(min) = self.min_length.filter(|min| len < *min) {
                violations.push(format!("must be at least {} {} long", min, unit));
            }
            if let Some(max) = self.max_length.filter(|max| len > *max) {
                violations.push(format!("must be at most {} {} long", max, unit));
            }
        }

        if let Some(n) = value.as_f64() {
            if let Some(min) = self.minimum.filter(|min| n < *min) {
                violations.push(format!("must be greater than or equal to {}", min));
            }
            if let Some(max) = self.maximum.filter(|max| n > *max) {
                violations.push(format!("must be less than or equal to {}", max));
            }
        }

        if let Some(allowed) = &self.one_of {
            if !allowed.iter().any(|candidate| same_value(candidate, value)) {
                let listed: Vec<String> = allowed.iter().map(Value::to_string).collect();
                violations.push(format!("must be one of: {}", listed.join(", ")));
            }
        }

        violations
    }
}
