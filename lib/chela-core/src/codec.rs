//! Encoder/decoder abstractions and their composition into a [`Codec`].

use std::sync::Arc;

use bytes::Bytes;

use crate::{
    ContentType, Error, JsonErrorDecoder, Request, RequestValue, Response, ResponseValue, Result,
    StatusClass, StatusDecoder, ValidatedDecoder, ValidatedEncoder,
};

/// Converts a typed value into an outgoing request body and headers.
///
/// This is one of the two extension points for custom wire formats; the
/// other is [`Decoder`].
pub trait Encoder: Send + Sync {
    /// Encode the given value into the given request.
    fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()>;
}

/// Converts an incoming response into a typed value or an error.
///
/// `out` is the decode slot; `None` means the caller does not want a value
/// and the body should be discarded.
pub trait Decoder: Send + Sync {
    /// Decode the given response into the given slot.
    fn decode(&self, response: &Response<Bytes>, out: Option<&mut dyn ResponseValue>)
    -> Result<()>;
}

/// An encoder/decoder pair used by a client.
///
/// Either side may be absent, in which case that direction is a no-op.
/// Cloning is cheap; both sides are reference-counted.
#[derive(Clone, Default)]
pub struct Codec {
    encoder: Option<Arc<dyn Encoder>>,
    decoder: Option<Arc<dyn Decoder>>,
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("encoder", &self.encoder.is_some())
            .field("decoder", &self.decoder.is_some())
            .finish()
    }
}

impl Codec {
    /// Creates a codec from an encoder and a decoder.
    pub fn new(encoder: impl Encoder + 'static, decoder: impl Decoder + 'static) -> Self {
        Self {
            encoder: Some(Arc::new(encoder)),
            decoder: Some(Arc::new(decoder)),
        }
    }

    /// Creates a codec that only encodes; responses are left untouched.
    pub fn encoder_only(encoder: impl Encoder + 'static) -> Self {
        Self {
            encoder: Some(Arc::new(encoder)),
            decoder: None,
        }
    }

    /// Creates a codec that only decodes; requests are sent body-less.
    pub fn decoder_only(decoder: impl Decoder + 'static) -> Self {
        Self {
            encoder: None,
            decoder: Some(Arc::new(decoder)),
        }
    }

    /// The default JSON codec for REST-style APIs.
    ///
    /// Requests are JSON-encoded and validated; responses route by status:
    /// 2xx decodes JSON into the slot, 4xx/5xx decode a JSON error object
    /// with an `"error"` field into a status-coded error. Decoded values are
    /// validated.
    #[must_use]
    pub fn json() -> Self {
        Self::new(
            ValidatedEncoder::new(JsonCodec),
            ValidatedDecoder::new(
                StatusDecoder::new()
                    .on(StatusClass::Success, JsonCodec)
                    .on(StatusClass::ClientError, JsonErrorDecoder::default())
                    .on(StatusClass::ServerError, JsonErrorDecoder::default()),
            ),
        )
    }

    /// Runs the encoder half, if present.
    pub fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()> {
        match &self.encoder {
            Some(encoder) => encoder.encode(request, value),
            None => Ok(()),
        }
    }

    /// Runs the decoder half, if present.
    pub fn decode(
        &self,
        response: &Response<Bytes>,
        out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        match &self.decoder {
            Some(decoder) => decoder.decode(response, out),
            None => Ok(()),
        }
    }
}

/// JSON wire format: implements both [`Encoder`] and [`Decoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Encoder for JsonCodec {
    fn encode(&self, request: &mut Request<Bytes>, value: &dyn RequestValue) -> Result<()> {
        let body = value.to_json()?;
        request
            .headers_mut()
            .insert("Content-Type".to_string(), ContentType::Json.to_string());
        request.set_body(body);
        Ok(())
    }
}

impl Decoder for JsonCodec {
    fn decode(
        &self,
        response: &Response<Bytes>,
        out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        if let Some(content_type) = response.content_type() {
            if !content_type.is_empty() && content_type != ContentType::Json.as_str() {
                return Err(Error::ContentType(content_type.to_owned()));
            }
        }
        match out {
            Some(slot) => slot.decode_json(response.body()),
            None => Ok(()),
        }
    }
}
