//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for easy glob importing:
//!
//! ```ignore
//! use chela::prelude::*;
//! ```

pub use crate::{
    ApiClient, CallHeaders, ClientConfig, Codec, ContentType, Endpoint, Error, HttpClient,
    HyperClient, JsonCodec, JsonErrorDecoder, Method, MethodEncoder, NoContent, NoopDecoder,
    Request, RequestBuilder, Response, Result, StatusClass, StatusDecoder, StatusKey,
    TextErrorDecoder, Validate, ValidatedDecoder, ValidatedEncoder,
};
pub use serde::{Deserialize, Serialize};
