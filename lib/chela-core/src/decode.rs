//! Decoder implementations beyond the JSON codec: status dispatch, error
//! decoders, and the validating wrapper.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Decoder, Error, Response, ResponseValue, Result, from_json};

/// One of the five HTTP status classes, used as a coarse routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 1xx status codes.
    Informational,
    /// 2xx status codes.
    Success,
    /// 3xx status codes.
    Redirection,
    /// 4xx status codes.
    ClientError,
    /// 5xx status codes.
    ServerError,
}

impl StatusClass {
    /// The class of the given status code, if it falls in 100..=599.
    #[must_use]
    pub const fn of(status: u16) -> Option<Self> {
        match status / 100 {
            1 => Some(Self::Informational),
            2 => Some(Self::Success),
            3 => Some(Self::Redirection),
            4 => Some(Self::ClientError),
            5 => Some(Self::ServerError),
            _ => None,
        }
    }
}

/// Routing key of a [`StatusDecoder`] entry: a literal status code or a
/// whole status class.
///
/// Literal entries always win over class entries when both could match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    /// An exact status code (e.g. 201).
    Code(u16),
    /// A whole status class (e.g. all of 2xx).
    Class(StatusClass),
}

impl From<u16> for StatusKey {
    fn from(status: u16) -> Self {
        Self::Code(status)
    }
}

impl From<StatusClass> for StatusKey {
    fn from(class: StatusClass) -> Self {
        Self::Class(class)
    }
}

/// Decoder that picks another decoder based on the response status code.
///
/// Resolution order: exact status code, then status class, then a fallback
/// that accepts the response only if its body is empty. Servers commonly
/// answer 204/304 with no body even when no entry is configured for them;
/// the fallback treats that as success. A non-empty body with no matching
/// entry fails with [`Error::UnhandledStatus`] carrying the raw body. Use
/// [`NoopDecoder`] to explicitly ignore a status's body instead of relying
/// on the fallback.
///
/// # Example
///
/// ```
/// use chela_core::{JsonCodec, StatusClass, StatusDecoder, TextErrorDecoder};
///
/// let decoder = StatusDecoder::new()
///     .on(StatusClass::Success, JsonCodec)
///     .on(StatusClass::ClientError, TextErrorDecoder)
///     .on(StatusClass::ServerError, TextErrorDecoder);
/// ```
#[derive(Clone, Default)]
pub struct StatusDecoder {
    entries: HashMap<StatusKey, Arc<dyn Decoder>>,
}

impl std::fmt::Debug for StatusDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusDecoder")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StatusDecoder {
    /// Creates an empty status dispatch table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoder for a status code or status class.
    #[must_use]
    pub fn on(mut self, key: impl Into<StatusKey>, decoder: impl Decoder + 'static) -> Self {
        self.entries.insert(key.into(), Arc::new(decoder));
        self
    }
}

impl Decoder for StatusDecoder {
    fn decode(
        &self,
        response: &Response<Bytes>,
        out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        let status = response.status();
        let decoder = self.entries.get(&StatusKey::Code(status)).or_else(|| {
            StatusClass::of(status).and_then(|class| self.entries.get(&StatusKey::Class(class)))
        });

        match decoder {
            Some(decoder) => decoder.decode(response, out),
            // No entry and nothing to decode: acceptable.
            None if response.body().is_empty() => Ok(()),
            None => Err(Error::unhandled_status(status, response.body().clone())),
        }
    }
}

/// Decoder that does nothing, never reading the body.
///
/// Registering it marks "intentionally ignore this status's body", distinct
/// from "no entry configured" which only tolerates empty bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDecoder;

impl Decoder for NoopDecoder {
    fn decode(
        &self,
        _response: &Response<Bytes>,
        _out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Decoder that turns the response body into a status-coded error.
///
/// The body is read as UTF-8 text and trimmed; the result always carries
/// the response's status code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextErrorDecoder;

impl Decoder for TextErrorDecoder {
    fn decode(
        &self,
        response: &Response<Bytes>,
        _out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        let text = String::from_utf8_lossy(response.body());
        Err(Error::http(response.status(), text.trim()))
    }
}

/// Decoder that extracts a status-coded error from a JSON object body.
///
/// The message is taken from the configured field (`"error"` by default).
#[derive(Debug, Clone)]
pub struct JsonErrorDecoder {
    field: String,
}

impl JsonErrorDecoder {
    /// Creates a decoder reading the error message from the given field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Default for JsonErrorDecoder {
    fn default() -> Self {
        Self::new("error")
    }
}

impl Decoder for JsonErrorDecoder {
    fn decode(
        &self,
        response: &Response<Bytes>,
        _out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        let value: serde_json::Value = from_json(response.body())?;
        let message = value
            .get(&self.field)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        Err(Error::http(response.status(), message))
    }
}

/// Decoder wrapper that validates the slot after a successful decode.
///
/// A validation failure surfaces to the caller even when the inner decode
/// succeeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedDecoder<D> {
    inner: D,
}

impl<D> ValidatedDecoder<D> {
    /// Wraps the given decoder.
    pub const fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Decoder> Decoder for ValidatedDecoder<D> {
    fn decode(
        &self,
        response: &Response<Bytes>,
        out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        match out {
            Some(slot) => {
                self.inner.decode(response, Some(&mut *slot))?;
                slot.validate()
            }
            None => self.inner.decode(response, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{JsonCodec, Validate};

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Echo {
        message: String,
    }

    impl Validate for Echo {
        fn validate(&self) -> Result<()> {
            if self.message.is_empty() {
                return Err(Error::validation("message is required"));
            }
            Ok(())
        }
    }

    fn response(status: u16, body: &'static [u8]) -> Response<Bytes> {
        Response::new(status, HashMap::new(), Bytes::from_static(body))
    }

    #[test]
    fn status_class_of() {
        assert_eq!(StatusClass::of(101), Some(StatusClass::Informational));
        assert_eq!(StatusClass::of(200), Some(StatusClass::Success));
        assert_eq!(StatusClass::of(301), Some(StatusClass::Redirection));
        assert_eq!(StatusClass::of(404), Some(StatusClass::ClientError));
        assert_eq!(StatusClass::of(599), Some(StatusClass::ServerError));
        assert_eq!(StatusClass::of(600), None);
        assert_eq!(StatusClass::of(0), None);
    }

    #[test]
    fn status_decoder_class_routes_whole_bucket() {
        let decoder = StatusDecoder::new().on(StatusClass::Success, JsonCodec);

        // Every 2xx code routes to the same sub-decoder.
        for status in [200, 201, 299] {
            let mut out = Echo::default();
            decoder
                .decode(
                    &response(status, br#"{"message":"ok"}"#),
                    Some(&mut out),
                )
                .expect("decode");
            assert_eq!(out.message, "ok");
        }
    }

    #[test]
    fn status_decoder_exact_code_wins_over_class() {
        let decoder = StatusDecoder::new()
            .on(StatusClass::ClientError, TextErrorDecoder)
            .on(404u16, NoopDecoder);

        // 404 hits the literal NoopDecoder entry instead of the 4xx bucket.
        decoder
            .decode(&response(404, b"not found"), None)
            .expect("noop");

        // Other 4xx codes still hit the bucket.
        let err = decoder
            .decode(&response(400, b"bad request"), None)
            .expect_err("text error");
        assert_eq!(err.to_string(), "400: bad request");
    }

    #[test]
    fn status_decoder_fallback_accepts_empty_body() {
        let decoder = StatusDecoder::new().on(StatusClass::Success, JsonCodec);

        // No entry for 3xx, but the body is empty, so the response passes.
        decoder.decode(&response(304, b""), None).expect("empty ok");
    }

    #[test]
    fn status_decoder_fallback_rejects_nonempty_body() {
        let decoder = StatusDecoder::new().on(StatusClass::Success, JsonCodec);

        let err = decoder
            .decode(&response(418, b"teapot"), None)
            .expect_err("should fail");
        match err {
            Error::UnhandledStatus { status, body } => {
                assert_eq!(status, 418);
                assert_eq!(body.as_ref(), b"teapot");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn noop_decoder_ignores_everything() {
        NoopDecoder
            .decode(&response(500, b"disaster"), None)
            .expect("noop never fails");
    }

    #[test]
    fn text_error_decoder_trims_body() {
        let err = TextErrorDecoder
            .decode(&response(400, b"  bad request\n"), None)
            .expect_err("always errors");
        assert_eq!(err.to_string(), "400: bad request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn text_error_decoder_strips_existing_prefix() {
        // A server that already prefixed the code does not get doubled.
        let err = TextErrorDecoder
            .decode(&response(400, b"400: bad request"), None)
            .expect_err("always errors");
        assert_eq!(err.to_string(), "400: bad request");
    }

    #[test]
    fn json_error_decoder_reads_configured_field() {
        let err = JsonErrorDecoder::default()
            .decode(&response(500, br#"{"error":"boom"}"#), None)
            .expect_err("always errors");
        assert_eq!(err.to_string(), "500: boom");

        let err = JsonErrorDecoder::new("detail")
            .decode(&response(422, br#"{"detail":"unprocessable"}"#), None)
            .expect_err("always errors");
        assert_eq!(err.to_string(), "422: unprocessable");
    }

    #[test]
    fn json_error_decoder_missing_field_is_empty_message() {
        let err = JsonErrorDecoder::default()
            .decode(&response(500, br#"{"other":"x"}"#), None)
            .expect_err("always errors");
        assert_eq!(err.to_string(), "500: ");
    }

    #[test]
    fn json_error_decoder_invalid_body() {
        let err = JsonErrorDecoder::default()
            .decode(&response(500, b"not json"), None)
            .expect_err("should fail");
        assert!(matches!(err, Error::JsonDeserialization { .. }));
    }

    #[test]
    fn validated_decoder_surfaces_validation_failure() {
        let decoder = ValidatedDecoder::new(JsonCodec);
        let mut out = Echo::default();

        // Decodes fine, but the decoded value fails its own check.
        let err = decoder
            .decode(&response(200, br#"{"message":""}"#), Some(&mut out))
            .expect_err("validation should fail");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn validated_decoder_passes_valid_value() {
        let decoder = ValidatedDecoder::new(JsonCodec);
        let mut out = Echo::default();
        decoder
            .decode(&response(200, br#"{"message":"hi"}"#), Some(&mut out))
            .expect("decode");
        assert_eq!(out.message, "hi");
    }

    #[test]
    fn validated_decoder_without_slot_skips_validation() {
        let decoder = ValidatedDecoder::new(NoopDecoder);
        decoder
            .decode(&response(204, b""), None)
            .expect("no slot, nothing to validate");
    }
}
