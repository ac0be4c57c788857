use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use utoipa::ToSchema;

use super::rules::{type_matches, ArgumentRules};
use crate::config::ErrorsConfig;
use crate::errors::{
    AppError, ErrorBody, ErrorKind, ErrorResponse, InvalidArgumentTypeError,
    InvalidArgumentValueError, ValueType,
};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub errors: ErrorsConfig,
    pub instance_id: String,
}

impl AppStateInner {
    fn render(&self, error: AppError) -> ErrorResponse {
        ErrorResponse::with_options(error, self.errors.render_options())
    }

    fn docs_url(&self, kind: ErrorKind) -> Option<String> {
        self.errors.docs_url(kind.as_str())
    }
}

/// Argument check request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckRequest {
    /// Name of the argument being checked
    pub argument: String,
    /// Type the argument must have
    pub expected_type: ValueType,
    /// Value given for the argument (missing means null)
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
    /// Constraints applied once the type is correct
    #[serde(default)]
    pub rules: ArgumentRules,
}

/// Argument check result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckResponse {
    /// Name of the checked argument
    pub argument: String,
    /// Type of the given value
    pub value_type: ValueType,
    /// Always true; invalid arguments produce an error body instead
    pub valid: bool,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "structured-errors",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// Check an argument value against its expected type and rules
#[utoipa::path(
    post,
    path = "/arguments/check",
    tag = "arguments",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Argument is valid", body = CheckResponse),
        (status = 400, description = "Value has the wrong type", body = ErrorBody),
        (status = 422, description = "Value breaks a rule or the body is malformed", body = ErrorBody)
    )
)]
pub async fn check_argument(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        let error = InvalidArgumentValueError::new(
            "body",
            json!([rejection.body_text()]),
            "Send a JSON object with argument, expected_type and value fields.",
        )
        .with_message(rejection.to_string())
        .with_resolution_urls(state.docs_url(ErrorKind::InvalidArgumentValue));
        state.render(error.into())
    })?;

    let value_type = ValueType::of(&request.value);
    debug!(
        argument = %request.argument,
        expected = %request.expected_type,
        given = %value_type,
        "Checking argument"
    );

    if !type_matches(request.expected_type, value_type) {
        let error = InvalidArgumentTypeError::new(
            request.argument.as_str(),
            request.expected_type,
            value_type,
        )
        .with_resolution_urls(state.docs_url(ErrorKind::InvalidArgumentType));
        return Err(state.render(error.into()));
    }

    let violations = request.rules.violations(&request.value);
    if !violations.is_empty() {
        let error = InvalidArgumentValueError::new(
            request.argument.as_str(),
            json!(violations),
            "Provide a value that satisfies every listed constraint.",
        )
        .with_message(format!(
            "{} constraint(s) violated by '{}'",
            violations.len(),
            request.argument
        ))
        .with_resolution_urls(state.docs_url(ErrorKind::InvalidArgumentValue));
        return Err(state.render(error.into()));
    }

    info!(argument = %request.argument, value_type = %value_type, "Argument is valid");

    Ok(Json(CheckResponse {
        argument: request.argument,
        value_type,
        valid: true,
    }))
}
