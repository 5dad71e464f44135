use http::StatusCode;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// The error type for qcloud operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    response: Option<Box<FailedResponse>>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing profile, unknown service, empty secrets)
    ConfigInvalid,

    /// Request cannot be built (invalid header values, unencodable body, etc.)
    RequestInvalid,

    /// The service answered with a non-2xx status
    RequestFailed,

    /// No response was obtained (timeout, DNS, connection reset, etc.)
    Transport,

    /// Unexpected errors
    Unexpected,
}

/// The response carried by a [`ErrorKind::RequestFailed`] error.
#[derive(Debug, Clone)]
pub struct FailedResponse {
    /// HTTP status code returned by the service.
    pub status: StatusCode,
    /// Raw response body text.
    pub body: String,
    /// Parsed response body, empty if the body is not a JSON object.
    pub json: Map<String, Value>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            response: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        self.kind == ErrorKind::ConfigInvalid
    }

    /// Check if this error happened before any response was received
    pub fn is_transport_error(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// HTTP status of the failed response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|r| r.status)
    }

    /// Raw body text of the failed response, if any.
    pub fn response_body(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.body.as_str())
    }

    /// Parsed body of the failed response, if any.
    pub fn response_json(&self) -> Option<&Map<String, Value>> {
        self.response.as_ref().map(|r| &r.json)
    }

    /// The failed response, if any.
    pub fn response(&self) -> Option<&FailedResponse> {
        self.response.as_deref()
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a config error for a required key that is absent.
    pub fn missing_config(key: &str) -> Self {
        Self::config_invalid(format!("Missing required configuration: {key}"))
    }

    /// Create a config error for a key holding an unusable value.
    pub fn invalid_config(key: &str, reason: &str) -> Self {
        Self::config_invalid(format!("Invalid configuration for '{key}': {reason}"))
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a request failed error from a non-2xx response.
    pub fn request_failed(
        message: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>,
        json: Map<String, Value>,
    ) -> Self {
        let mut err = Self::new(ErrorKind::RequestFailed, message);
        err.response = Some(Box::new(FailedResponse {
            status,
            body: body.into(),
            json,
        }));
        err
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::RequestFailed => write!(f, "request failed"),
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
