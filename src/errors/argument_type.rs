use serde_json::{json, Value};
use std::fmt;

use super::contract::{impl_structured_error, Details, ErrorParts};
use super::kind::ErrorKind;
use super::template::{self, ARG_TYPE, VAR_TYPE};
use super::value_type::ValueType;

/// Details key grouping type errors by argument name
pub const ARGUMENT_TYPE_ERROR: &str = "argument_type_error";

const DETAIL_TEMPLATE: &str =
    "Argument must be of type: [ARG_TYPE], but a value of type: [VAR_TYPE] was given.";

const RESOLUTION_TEMPLATE: &str =
    "Ensure you are providing a value of the correct type: [ARG_TYPE].";

/// An argument received a value of the wrong type (HTTP 400)
#[derive(Debug)]
pub struct InvalidArgumentTypeError {
    argument: String,
    argument_type: ValueType,
    argument_value_type: ValueType,
    parts: ErrorParts,
}

impl InvalidArgumentTypeError {
    /// `argument_type` is the type the argument accepts, `argument_value_type`
    /// the type of the value that was given. Use [`ValueType::of`] to tag
    /// dynamically typed input.
    pub fn new(
        argument: impl Into<String>,
        argument_type: ValueType,
        argument_value_type: ValueType,
    ) -> Self {
        let argument = argument.into();
        let bindings = [
            (ARG_TYPE, argument_type.as_str()),
            (VAR_TYPE, argument_value_type.as_str()),
        ];

        let message = template::render_value(&json!([DETAIL_TEMPLATE]), &bindings)
            .expect("detail template only uses ARG_TYPE and VAR_TYPE");
        let resolution = template::render(RESOLUTION_TEMPLATE, &bindings)
            .expect("resolution template only uses ARG_TYPE");

        let mut per_argument = Details::new();
        per_argument.insert(argument.clone(), message);

        let mut parts = ErrorParts::new(ErrorKind::InvalidArgumentType);
        parts
            .details
            .insert(ARGUMENT_TYPE_ERROR.to_string(), Value::Object(per_argument));
        parts.resolution = Some(resolution);

        Self {
            argument,
            argument_type,
            argument_value_type,
            parts,
        }
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn argument_type(&self) -> ValueType {
        self.argument_type
    }

    pub fn argument_value_type(&self) -> ValueType {
        self.argument_value_type
    }
}

impl fmt::Display for InvalidArgumentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.message.is_empty() {
            write!(
                f,
                "invalid type for argument '{}': expected {}, got {}",
                self.argument, self.argument_type, self.argument_value_type
            )
        } else {
            f.write_str(&self.parts.message)
        }
    }
}

impl_structured_error!(InvalidArgumentTypeError, ErrorKind::InvalidArgumentType);
