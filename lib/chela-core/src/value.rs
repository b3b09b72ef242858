//! Type-erased request/response values and the [`Validate`] capability.
//!
//! Encoders and decoders are stored behind `dyn` so they can be composed in
//! dispatch tables ([`MethodEncoder`](crate::MethodEncoder),
//! [`StatusDecoder`](crate::StatusDecoder)). The typed world crosses into
//! that erased world through [`RequestValue`] and [`ResponseValue`]: blanket
//! implementations cover every serde-capable type that opts into
//! [`Validate`], so user code never implements these traits by hand.

use bytes::Bytes;

use crate::Result;

/// Optional self-check for request and response values.
///
/// The validating codec wrappers
/// ([`ValidatedEncoder`](crate::ValidatedEncoder),
/// [`ValidatedDecoder`](crate::ValidatedDecoder)) call this after the base
/// encode/decode step. The default implementation accepts everything, so
/// opting in costs one line:
///
/// ```
/// use chela_core::{Error, Validate};
///
/// struct Plain;
/// impl Validate for Plain {}
///
/// struct Message(String);
/// impl Validate for Message {
///     fn validate(&self) -> chela_core::Result<()> {
///         if self.0.is_empty() {
///             return Err(Error::validation("message is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// Check the value, returning an error to fail the call.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

/// Type-erased outgoing value handed to [`Encoder`](crate::Encoder)s.
///
/// Implemented for every `T: Serialize + Validate + Send + Sync` via a
/// blanket impl.
pub trait RequestValue: Send + Sync {
    /// Serialize the value to JSON bytes.
    fn to_json(&self) -> Result<Bytes>;

    /// Serialize the value to form URL-encoded bytes.
    fn to_form(&self) -> Result<Bytes>;

    /// Run the value's own [`Validate`] check.
    fn validate(&self) -> Result<()>;
}

impl<T> RequestValue for T
where
    T: serde::Serialize + Validate + Send + Sync,
{
    fn to_json(&self) -> Result<Bytes> {
        crate::to_json(self)
    }

    fn to_form(&self) -> Result<Bytes> {
        crate::to_form(self)
    }

    fn validate(&self) -> Result<()> {
        Validate::validate(self)
    }
}

/// Type-erased decode slot handed to [`Decoder`](crate::Decoder)s.
///
/// A decoder that produces a value overwrites the slot in place; a decoder
/// that produces an error leaves it untouched. Implemented for every
/// `T: DeserializeOwned + Validate + Send` via a blanket impl.
pub trait ResponseValue: Send {
    /// Replace the slot with a value decoded from JSON bytes.
    fn decode_json(&mut self, bytes: &[u8]) -> Result<()>;

    /// Run the decoded value's own [`Validate`] check.
    fn validate(&self) -> Result<()>;
}

impl<T> ResponseValue for T
where
    T: serde::de::DeserializeOwned + Validate + Send,
{
    fn decode_json(&mut self, bytes: &[u8]) -> Result<()> {
        *self = crate::from_json(bytes)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Validate::validate(self)
    }
}

/// Marker type for endpoints without a request or response body.
///
/// As a response type it makes the bound endpoint skip slot allocation
/// entirely, so a 204 with an empty body decodes to `NoContent` without ever
/// touching a JSON decoder. As a request type it suppresses encoding. Its
/// serde implementations are forgiving on purpose: it serializes as a unit
/// and swallows any input when deserialized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

impl Validate for NoContent {}

impl serde::Serialize for NoContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> serde::Deserialize<'de> for NoContent {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}
