use std::fmt;
use thiserror::Error;

/// The error type for waybill client operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<http::StatusCode>,
    code: Option<String>,
    raw_body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required credential fields are empty or unset.
    ConfigInvalid,

    /// Network-level failure (timeout, DNS, connection refused).
    Transport,

    /// Upstream answered with a non-200 status code.
    HttpStatus,

    /// Response body is malformed or not the expected envelope shape.
    EnvelopeInvalid,

    /// Well-formed envelope signaling a provider-defined failure code.
    Business,

    /// Unexpected errors (request construction, serialization, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            code: None,
            raw_body: None,
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status code the upstream answered with.
    pub fn with_status(mut self, status: http::StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the provider-defined failure code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the raw response body for diagnostics.
    pub fn with_raw_body(mut self, raw_body: impl Into<String>) -> Self {
        self.raw_body = Some(raw_body.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the HTTP status code, if this failure carries one.
    pub fn status(&self) -> Option<http::StatusCode> {
        self.status
    }

    /// Get the provider failure code, if this is a business error.
    pub fn business_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Get the raw response body attached for diagnostics.
    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    /// Check if this error was reported by the provider itself.
    pub fn is_business_error(&self) -> bool {
        self.kind == ErrorKind::Business
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an HTTP status error.
    pub fn http_status(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HttpStatus, message)
    }

    /// Create an envelope invalid error.
    pub fn envelope_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EnvelopeInvalid, message)
    }

    /// Create a business error.
    pub fn business(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Business, message)
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::HttpStatus => write!(f, "unexpected http status"),
            ErrorKind::EnvelopeInvalid => write!(f, "invalid response envelope"),
            ErrorKind::Business => write!(f, "provider reported failure"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
