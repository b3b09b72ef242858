//! Error types for chela.

use bytes::Bytes;
use derive_more::{Display, Error, From};

/// Main error type for chela operations.
///
/// Status-coded errors produced by the error decoders render as
/// `"<code>: <message>"`; that string format is part of the stable contract,
/// but callers should match on the variant or use [`Error::status`] rather
/// than parse it.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Status-coded application error, as surfaced by the error decoders.
    #[display("{status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message, without the `"<code>: "` prefix.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("encode error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("decode error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Form URL-encoded serialization error.
    #[display("form encode error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),

    /// The response decoder rejected an unexpected `Content-Type`.
    #[display("unexpected content type: {_0:?}")]
    #[from(skip)]
    ContentType(#[error(not(source))] String),

    /// No status decoder matched and the response carried a body.
    #[display("no decoder for status {status} ({})", String::from_utf8_lossy(body))]
    #[from(skip)]
    UnhandledStatus {
        /// HTTP status code of the unhandled response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        #[error(not(source))]
        body: Bytes,
    },

    /// A request or response value failed its own [`Validate`](crate::Validate) check.
    #[display("validation failed: {_0}")]
    #[from(skip)]
    Validation(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a status-coded error from a status code and message.
    ///
    /// If the message already carries a `"<code>: "` prefix it is stripped,
    /// so chained decoders never produce a doubled prefix.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        let mut message = message.into();
        let prefix = format!("{status}: ");
        if let Some(stripped) = message.strip_prefix(&prefix) {
            message = stripped.to_owned();
        }
        Self::Http { status, message }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unhandled-status error carrying the raw body.
    #[must_use]
    pub fn unhandled_status(status: u16, body: Bytes) -> Self {
        Self::UnhandledStatus { status, body }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::UnhandledStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this error carries a client error status (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this error carries a server error status (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
