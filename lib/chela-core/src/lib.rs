//! Core types and codec machinery for the chela REST client.
//!
//! This crate provides the foundational pieces used by chela:
//! - [`Method`], [`Request`], [`Response`] - HTTP primitives
//! - [`Error`] and [`Result`] - Error handling
//! - [`Encoder`], [`Decoder`], [`Codec`] - The pluggable wire-format seam
//! - [`MethodEncoder`] and [`StatusDecoder`] - Dispatch tables keyed by
//!   request method and response status
//! - [`TextErrorDecoder`], [`JsonErrorDecoder`] - Status-coded error decoders
//! - [`Validate`] - Optional post-encode/post-decode self-check capability
//! - [`NoContent`] - Marker for body-less requests and responses
//! - [`HttpClient`] - The transport trait implemented by `chela`

mod body;
mod client;
mod codec;
mod decode;
mod encode;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;
mod value;

pub use body::{ContentType, from_json, to_form, to_json};
pub use client::HttpClient;
pub use codec::{Codec, Decoder, Encoder, JsonCodec};
pub use decode::{
    JsonErrorDecoder, NoopDecoder, StatusClass, StatusDecoder, StatusKey, TextErrorDecoder,
    ValidatedDecoder,
};
pub use encode::{FormEncoder, MethodEncoder, ValidatedEncoder};
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use value::{NoContent, RequestValue, ResponseValue, Validate};
