use serde_json::Value;
use std::fmt;

use super::contract::{impl_structured_error, Details, ErrorParts};
use super::kind::ErrorKind;

/// Details key grouping value errors by argument name
pub const ARGUMENT_VALUE_ERROR: &str = "argument_value_error";

/// An argument received a correctly typed but unacceptable value (HTTP 422)
///
/// Details and resolution come from the caller and are stored verbatim.
#[derive(Debug)]
pub struct InvalidArgumentValueError {
    argument: String,
    parts: ErrorParts,
}

impl InvalidArgumentValueError {
    /// `details` describes why the value is invalid, typically a list of
    /// violated constraints. `resolution` says how to fix it and must not
    /// carry documentation links; add those with `with_resolution_url`.
    pub fn new(argument: impl Into<String>, details: Value, resolution: impl Into<String>) -> Self {
        let argument = argument.into();

        let mut per_argument = Details::new();
        per_argument.insert(argument.clone(), details);

        let mut parts = ErrorParts::new(ErrorKind::InvalidArgumentValue);
        parts
            .details
            .insert(ARGUMENT_VALUE_ERROR.to_string(), Value::Object(per_argument));
        parts.resolution = Some(resolution.into());

        Self { argument, parts }
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }
}

impl fmt::Display for InvalidArgumentValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.message.is_empty() {
            write!(f, "invalid value for argument '{}'", self.argument)
        } else {
            f.write_str(&self.parts.message)
        }
    }
}

impl_structured_error!(InvalidArgumentValueError, ErrorKind::InvalidArgumentValue);
