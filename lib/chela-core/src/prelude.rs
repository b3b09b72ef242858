//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use chela_core::prelude::*;
//! ```

pub use crate::{
    Codec, ContentType, Decoder, Encoder, Error, HttpClient, JsonCodec, JsonErrorDecoder, Method,
    MethodEncoder, NoContent, NoopDecoder, Request, RequestBuilder, Response, Result, StatusClass,
    StatusDecoder, StatusKey, TextErrorDecoder, Validate, ValidatedDecoder, ValidatedEncoder,
    from_json, to_form, to_json,
};
