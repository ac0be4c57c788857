use axum::http::HeaderMap;
use serde_json::{Map, Value};

use super::kind::ErrorKind;

/// Structured, machine-readable specifics of an error
pub type Details = Map<String, Value>;

/// Owned cause attached to an error
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Accessors every application error exposes to the HTTP boundary
///
/// All methods are pure reads of state fixed at construction. The cause of
/// an error is available through [`std::error::Error::source`].
pub trait StructuredError: std::error::Error + Send + Sync + 'static {
    /// HTTP status for the response
    fn status_code(&self) -> u16;

    /// Headers merged into the response (possibly empty)
    fn headers(&self) -> &HeaderMap;

    /// Stable category identifier, never empty
    fn kind(&self) -> ErrorKind;

    /// Structured detail data (possibly empty)
    fn details(&self) -> &Details;

    /// Brief remediation instruction. Documentation links belong in
    /// [`StructuredError::resolution_urls`], not here.
    fn resolution(&self) -> Option<&str>;

    /// Documentation URLs supplementing the resolution
    fn resolution_urls(&self) -> &[String];

    /// Human-readable message, empty when none was given
    fn message(&self) -> &str;

    /// Application-specific numeric code, 0 when none was given
    fn code(&self) -> i64;
}

/// State shared by every concrete error type
#[derive(Debug, Default)]
pub(crate) struct ErrorParts {
    pub(crate) status_code: u16,
    pub(crate) headers: HeaderMap,
    pub(crate) details: Details,
    pub(crate) resolution: Option<String>,
    pub(crate) resolution_urls: Vec<String>,
    pub(crate) message: String,
    pub(crate) code: i64,
    pub(crate) cause: Option<BoxError>,
}

impl ErrorParts {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            status_code: kind.status_code(),
            ..Default::default()
        }
    }
}

/// Implements [`StructuredError`], `std::error::Error` and the common
/// builder methods for a type holding its state in a `parts: ErrorParts` field.
macro_rules! impl_structured_error {
    ($ty:ty, $kind:expr) => {
        impl $crate::errors::StructuredError for $ty {
            fn status_code(&self) -> u16 {
                self.parts.status_code
            }

            fn headers(&self) -> &::axum::http::HeaderMap {
                &self.parts.headers
            }

            fn kind(&self) -> $crate::errors::ErrorKind {
                $kind
            }

            fn details(&self) -> &$crate::errors::Details {
                &self.parts.details
            }

            fn resolution(&self) -> Option<&str> {
                self.parts.resolution.as_deref()
            }

            fn resolution_urls(&self) -> &[String] {
                &self.parts.resolution_urls
            }

            fn message(&self) -> &str {
                &self.parts.message
            }

            fn code(&self) -> i64 {
                self.parts.code
            }
        }

        impl ::std::error::Error for $ty {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                self.parts
                    .cause
                    .as_deref()
                    .map(|cause| cause as &(dyn ::std::error::Error + 'static))
            }
        }

        impl $ty {
            /// Set the human-readable message
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.parts.message = message.into();
                self
            }

            /// Set the application-specific numeric code
            pub fn with_code(mut self, code: i64) -> Self {
                self.parts.code = code;
                self
            }

            /// Attach the error that caused this one
            pub fn with_cause(mut self, cause: impl Into<$crate::errors::BoxError>) -> Self {
                self.parts.cause = Some(cause.into());
                self
            }

            /// Add a response header, replacing any previous value for `name`
            pub fn with_header(
                mut self,
                name: ::axum::http::HeaderName,
                value: ::axum::http::HeaderValue,
            ) -> Self {
                self.parts.headers.insert(name, value);
                self
            }

            /// Merge a set of response headers
            pub fn with_headers(mut self, headers: ::axum::http::HeaderMap) -> Self {
                self.parts.headers.extend(headers);
                self
            }

            /// Append a documentation URL
            pub fn with_resolution_url(mut self, url: impl Into<String>) -> Self {
                self.parts.resolution_urls.push(url.into());
                self
            }

            /// Append several documentation URLs, keeping their order
            pub fn with_resolution_urls<I, S>(mut self, urls: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.parts
                    .resolution_urls
                    .extend(urls.into_iter().map(Into::into));
                self
            }
        }
    };
}

pub(crate) use impl_structured_error;
