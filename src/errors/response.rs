use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::app::AppError;
use super::contract::{Details, StructuredError};
use super::kind::ErrorKind;

/// JSON body of an error response
///
/// Optional fields are left out entirely when empty, so a parsed body only
/// carries what the error actually had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error category for programmatic handling
    pub kind: ErrorKind,
    /// Human-readable message, only present when messages are exposed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable specifics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Details>,
    /// How to resolve the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Links to further documentation
    #[serde(
        rename = "resolutionURLs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resolution_urls: Option<Vec<String>>,
}

/// How much of an error the boundary reveals to clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the error message in the body
    pub expose_message: bool,
}

impl ErrorBody {
    pub fn from_error<E: StructuredError + ?Sized>(error: &E, options: RenderOptions) -> Self {
        let message = error.message();
        let details = error.details();
        let urls = error.resolution_urls();

        Self {
            kind: error.kind(),
            message: (options.expose_message && !message.is_empty()).then(|| message.to_string()),
            details: (!details.is_empty()).then(|| details.clone()),
            resolution: error
                .resolution()
                .filter(|resolution| !resolution.is_empty())
                .map(str::to_string),
            resolution_urls: (!urls.is_empty()).then(|| urls.to_vec()),
        }
    }
}

/// An error paired with the options used to render it
#[derive(Debug)]
pub struct ErrorResponse<E = AppError> {
    pub error: E,
    pub options: RenderOptions,
}

impl<E: StructuredError> ErrorResponse<E> {
    pub fn new(error: E) -> Self {
        Self {
            error,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(error: E, options: RenderOptions) -> Self {
        Self { error, options }
    }
}

impl<E: StructuredError> IntoResponse for ErrorResponse<E> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                kind = %self.error.kind(),
                status = %status.as_u16(),
                code = self.error.code(),
                "{}",
                self.error
            );
        } else {
            warn!(
                kind = %self.error.kind(),
                status = %status.as_u16(),
                code = self.error.code(),
                "{}",
                self.error
            );
        }

        let body = ErrorBody::from_error(&self.error, self.options);
        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .extend(self.error.headers().clone());
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{HttpError, InvalidArgumentTypeError, ValueType};
    use axum::http::{header, HeaderName, HeaderValue};
    use serde_json::json;

    #[test]
    fn test_type_error_body_shape() {
        let err = AppError::invalid_argument_type("name", ValueType::String, ValueType::Integer);
        let body = serde_json::to_value(ErrorBody::from_error(&err, RenderOptions::default()))
            .unwrap();

        assert_eq!(
            body,
            json!({
                "kind": "invalid_argument_type",
                "details": {
                    "argument_type_error": {
                        "name": ["Argument must be of type: string, but a value of type: integer was given."]
                    }
                },
                "resolution": "Ensure you are providing a value of the correct type: string."
            })
        );
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let err = HttpError::new().with_message("hidden");
        let body = serde_json::to_value(ErrorBody::from_error(&err, RenderOptions::default()))
            .unwrap();
        assert_eq!(body, json!({"kind": "Exception"}));
    }

    #[test]
    fn test_message_exposure_is_opt_in() {
        let err = HttpError::new().with_message("database offline");
        let options = RenderOptions {
            expose_message: true,
        };
        let body = ErrorBody::from_error(&err, options);
        assert_eq!(body.message.as_deref(), Some("database offline"));

        let silent = HttpError::new();
        assert_eq!(ErrorBody::from_error(&silent, options).message, None);
    }

    #[test]
    fn test_body_round_trip() {
        let err = InvalidArgumentTypeError::new("x", ValueType::Integer, ValueType::String)
            .with_resolution_urls(["https://docs.example.com/a", "https://docs.example.com/b"]);
        let body = ErrorBody::from_error(&err, RenderOptions::default());

        let text = serde_json::to_string(&body).unwrap();
        assert!(text.contains("\"resolutionURLs\""));
        let parsed: ErrorBody = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, body);

        let bare = ErrorBody::from_error(&HttpError::new(), RenderOptions::default());
        let parsed: ErrorBody = serde_json::from_str(&serde_json::to_string(&bare).unwrap()).unwrap();
        assert_eq!(parsed, bare);
        assert_eq!(parsed.details, None);
        assert_eq!(parsed.resolution, None);
        assert_eq!(parsed.resolution_urls, None);
    }

    #[test]
    fn test_into_response_status_bad_request() {
        let err = AppError::invalid_argument_type("x", ValueType::Integer, ValueType::String);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status_unprocessable() {
        let err = AppError::invalid_argument_value("y", json!(["too short"]), "Use more.");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_response_status_internal_error() {
        let response = AppError::internal("Something went wrong").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_invalid_status_falls_back() {
        let response = AppError::from(HttpError::new().with_status(42)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_merges_headers() {
        let err = HttpError::new()
            .with_status(429)
            .with_header(header::RETRY_AFTER, HeaderValue::from_static("30"))
            .with_header(
                HeaderName::from_static("x-error-source"),
                HeaderValue::from_static("limiter"),
            );
        let response = ErrorResponse::new(err).into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "30");
        assert_eq!(response.headers()["x-error-source"], "limiter");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
