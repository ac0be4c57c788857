use std::fmt;

use super::contract::{impl_structured_error, Details, ErrorParts};
use super::kind::ErrorKind;

/// General-purpose HTTP error of kind `Exception`
///
/// Defaults to status 500 with no details or resolution.
#[derive(Debug)]
pub struct HttpError {
    parts: ErrorParts,
}

impl HttpError {
    pub fn new() -> Self {
        Self {
            parts: ErrorParts::new(ErrorKind::Exception),
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.parts.status_code = status_code;
        self
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.parts.details = details;
        self
    }

    /// Brief remediation text. Links go in `with_resolution_url`; the text is
    /// stored verbatim and not checked for URLs.
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.parts.resolution = Some(resolution.into());
        self
    }
}

impl Default for HttpError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.message.is_empty() {
            write!(f, "HTTP error {}", self.parts.status_code)
        } else {
            f.write_str(&self.parts.message)
        }
    }
}

impl_structured_error!(HttpError, ErrorKind::Exception);
