//! The transport trait.
//!
//! Everything above this trait is codec logic; everything below it is an
//! HTTP implementation detail (pooling, TLS, timeouts). The `chela` crate
//! ships a hyper-based implementation.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP transport trait.
///
/// Implementations perform exactly one round trip and return the response
/// with its body fully buffered. Transport-level failures (connection, TLS,
/// timeout) are returned as-is; they are never reinterpreted by the codec
/// layer. Cancellation is cooperative: dropping the returned future must
/// abort the request.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid response
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
