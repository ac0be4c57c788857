use utoipa::OpenApi;

use crate::api::handlers::{CheckRequest, CheckResponse};
use crate::api::rules::ArgumentRules;
use crate::errors::{ErrorBody, ErrorKind, ValueType};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Structured Errors",
        version = "0.1.0",
        description = "Demonstration service for structured, machine-readable HTTP error bodies. Every error response carries a stable kind, optional details, and resolution guidance.",
        contact(
            name = "Structured Errors API",
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::check_argument,
    ),
    components(
        schemas(
            CheckRequest,
            CheckResponse,
            ArgumentRules,
            ErrorBody,
            ErrorKind,
            ValueType,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "arguments", description = "Argument validation endpoints"),
    )
)]
pub struct ApiDoc;
