use axum::http::HeaderMap;
use serde_json::Value;
use thiserror::Error;

use super::argument_type::InvalidArgumentTypeError;
use super::argument_value::InvalidArgumentValueError;
use super::contract::{Details, StructuredError};
use super::http::HttpError;
use super::kind::ErrorKind;
use super::value_type::ValueType;

/// Every error the application hands to the HTTP boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    InvalidArgumentType(#[from] InvalidArgumentTypeError),

    #[error(transparent)]
    InvalidArgumentValue(#[from] InvalidArgumentValueError),
}

impl AppError {
    fn inner(&self) -> &dyn StructuredError {
        match self {
            Self::Http(err) => err,
            Self::InvalidArgumentType(err) => err,
            Self::InvalidArgumentValue(err) => err,
        }
    }
}

/// Helpers for creating common errors
impl AppError {
    pub fn invalid_argument_type(
        argument: impl Into<String>,
        argument_type: ValueType,
        argument_value_type: ValueType,
    ) -> Self {
        InvalidArgumentTypeError::new(argument, argument_type, argument_value_type).into()
    }

    pub fn invalid_argument_value(
        argument: impl Into<String>,
        details: Value,
        resolution: impl Into<String>,
    ) -> Self {
        InvalidArgumentValueError::new(argument, details, resolution).into()
    }

    pub fn internal(message: impl Into<String>) -> Self {
        HttpError::new().with_message(message).into()
    }
}

impl StructuredError for AppError {
    fn status_code(&self) -> u16 {
        self.inner().status_code()
    }

    fn headers(&self) -> &HeaderMap {
        self.inner().headers()
    }

    fn kind(&self) -> ErrorKind {
        self.inner().kind()
    }

    fn details(&self) -> &Details {
        self.inner().details()
    }

    fn resolution(&self) -> Option<&str> {
        self.inner().resolution()
    }

    fn resolution_urls(&self) -> &[String] {
        self.inner().resolution_urls()
    }

    fn message(&self) -> &str {
        self.inner().message()
    }

    fn code(&self) -> i64 {
        self.inner().code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    fn check_age(value: &Value) -> Result<u64, AppError> {
        let age = value.as_u64().ok_or_else(|| {
            AppError::invalid_argument_type("age", ValueType::Integer, ValueType::of(value))
        })?;
        if age > 150 {
            return Err(AppError::invalid_argument_value(
                "age",
                json!(["must be at most 150"]),
                "Provide a realistic age.",
            ));
        }
        Ok(age)
    }

    #[test]
    fn test_errors_propagate_through_result() {
        assert_eq!(check_age(&json!(42)).unwrap(), 42);

        let err = check_age(&json!("42")).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgumentType(_)));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);

        let err = check_age(&json!(200)).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgumentValue(_)));
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.resolution(), Some("Provide a realistic age."));
    }

    #[test]
    fn test_delegates_to_variant() {
        let err: AppError = HttpError::new()
            .with_status(409)
            .with_message("conflict")
            .with_code(9)
            .with_resolution_url("https://docs.example.com/conflicts")
            .into();

        assert_eq!(err.status_code(), 409);
        assert_eq!(err.kind(), ErrorKind::Exception);
        assert_eq!(err.message(), "conflict");
        assert_eq!(err.code(), 9);
        assert_eq!(err.resolution_urls(), ["https://docs.example.com/conflicts"]);
        assert_eq!(err.to_string(), "conflict");
    }

    #[test]
    fn test_source_is_forwarded() {
        let err: AppError = HttpError::new()
            .with_cause(std::io::Error::new(std::io::ErrorKind::Other, "socket closed"))
            .into();
        assert_eq!(err.source().unwrap().to_string(), "socket closed");
    }

    #[test]
    fn test_internal_helper() {
        let err = AppError::internal("boom");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.kind(), ErrorKind::Exception);
        assert_eq!(err.to_string(), "boom");
    }
}
