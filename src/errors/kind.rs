use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Machine-readable error category carried in every error body
///
/// Clients branch on this value instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Generic HTTP error with no more specific category
    #[serde(rename = "Exception")]
    Exception,

    /// An argument received a value of the wrong type
    InvalidArgumentType,

    /// An argument received a correctly typed but unacceptable value
    InvalidArgumentValue,
}

impl ErrorKind {
    /// Wire identifier for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exception => "Exception",
            Self::InvalidArgumentType => "invalid_argument_type",
            Self::InvalidArgumentValue => "invalid_argument_value",
        }
    }

    /// Default HTTP status code for errors of this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Exception => 500,
            Self::InvalidArgumentType => 400,
            Self::InvalidArgumentValue => 422,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
