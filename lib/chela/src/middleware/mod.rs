//! Tower middleware layers for the chela transport.
//!
//! Layers compose onto [`HyperClient`](crate::HyperClient) through the
//! builder's `.layer()` method (last added = innermost) and line up with any
//! other Tower layer that speaks `Request<Bytes> -> Response<Bytes>`.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower's ServiceBuilder for users composing layers by hand.
pub use tower::ServiceBuilder;
