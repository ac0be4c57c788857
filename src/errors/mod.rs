//! Structured error model for HTTP error responses
//!
//! Every error exposes the [`StructuredError`] accessors; the boundary turns
//! any of them into a JSON [`ErrorBody`] without knowing the concrete type.

mod contract;

pub mod app;
pub mod argument_type;
pub mod argument_value;
pub mod http;
pub mod kind;
pub mod response;
pub mod template;
pub mod value_type;

pub use app::AppError;
pub use argument_type::{InvalidArgumentTypeError, ARGUMENT_TYPE_ERROR};
pub use argument_value::{InvalidArgumentValueError, ARGUMENT_VALUE_ERROR};
pub use contract::{BoxError, Details, StructuredError};
pub use http::HttpError;
pub use kind::ErrorKind;
pub use response::{ErrorBody, ErrorResponse, RenderOptions};
pub use template::TemplateError;
pub use value_type::ValueType;
