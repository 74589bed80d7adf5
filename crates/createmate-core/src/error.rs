//! Domain-level error types.

use thiserror::Error;

/// Failures talking to the content API.
///
/// An empty `generated_content` is not represented here: it is a normal
/// snapshot that simply does not satisfy a poll predicate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or the response never completed.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type coercion failures while reading form fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is not a number: {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    /// Leading digits present but too large for a 64-bit integer.
    #[error("{field} is out of range: {value:?}")]
    OutOfRange { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_detail_only() {
        let err = ApiError::Server {
            status: 500,
            detail: "agent timed out".to_string(),
        };
        assert_eq!(err.to_string(), "agent timed out");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn network_error_displays_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
