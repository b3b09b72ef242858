//! Encoder implementations beyond the JSON codec: method dispatch, form
//! encoding, and the validating wrapper.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::{ContentType, Encoder, Error, Method, Request, RequestValue, Result};

/// Encoder that picks another encoder based on the request method.
///
/// Selection goes exact method first, then the wildcard fallback. With
/// neither configured the call fails with a status-coded 405 error, the same
/// representation used by the decode-side error decoders.
///
/// # Example
///
/// ```
/// use chela_core::{FormEncoder, JsonCodec, Method, MethodEncoder};
///
/// let encoder = MethodEncoder::new()
///     .on(Method::Post, JsonCodec)
///     .fallback(FormEncoder);
/// ```
#[derive(Clone, Default)]
pub struct MethodEncoder {
    entries: HashMap<Method, Arc<dyn Encoder>>,
    fallback: Option<Arc<dyn Encoder>>,
}

impl std::fmt::Debug for MethodEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodEncoder")
            .field("methods", &self.entries.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl MethodEncoder {
    /// Creates an empty method dispatch table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an encoder for an exact method.
    #[must_use]
    pub fn on(mut self, method: Method, encoder: impl Encoder + 'static) -> Self {
        self.entries.insert(method, Arc::new(encoder));
        self
    }

    /// Registers the wildcard encoder used when no exact method matches.
    #[must_use]
    pub fn fallback(mut self, encoder: impl Encoder + 'static) -> Self {
        self.fallback = Some(Arc::new(encoder));
        self
    }
}

impl Encoder for MethodEncoder {
    fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()> {
        let encoder = self
            .entries
            .get(&request.method())
            .or(self.fallback.as_ref())
            .ok_or_else(|| Error::http(405, "method not allowed"))?;
        encoder.encode(request, value)
    }
}

/// Form URL-encoded wire format for request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormEncoder;

impl Encoder for FormEncoder {
    fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()> {
        let body = value.to_form()?;
        request.headers_mut().insert(
            "Content-Type".to_string(),
            ContentType::FormUrlEncoded.to_string(),
        );
        request.set_body(body);
        Ok(())
    }
}

/// Encoder wrapper that validates the value after encoding it.
///
/// Validation runs strictly before any network I/O, so an invalid value
/// never leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedEncoder<E> {
    inner: E,
}

impl<E> ValidatedEncoder<E> {
    /// Wraps the given encoder.
    pub const fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: Encoder> Encoder for ValidatedEncoder<E> {
    fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()> {
        self.inner.encode(request, value)?;
        value.validate()
    }
}
