//! Typed REST client for Rust.
//!
//! Bind endpoints once to a method, path, and request/response type pair,
//! then call them through an [`ApiClient`] holding the base URL, shared
//! headers, and a pluggable [`Codec`].
//!
//! # Example
//!
//! ```ignore
//! use chela::prelude::*;
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl Validate for User {}
//!
//! let client = ApiClient::new("https://api.example.com", Codec::json());
//! let get_user: Endpoint<NoContent, User> = Endpoint::get("/users/42");
//! let user = get_user.call(&CallHeaders::new(), &client, NoContent).await?;
//! ```

mod api_client;
mod client;
mod config;
mod endpoint;
mod headers;
pub mod middleware;
pub mod prelude;

// Re-export client types
pub use api_client::ApiClient;
pub use client::{HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::Endpoint;
pub use headers::CallHeaders;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use chela_core::{
    Codec, ContentType, Decoder, Encoder, Error, FormEncoder, HttpClient, JsonCodec,
    JsonErrorDecoder, Method, MethodEncoder, NoContent, NoopDecoder, Request, RequestBuilder,
    RequestValue, Response, ResponseValue, Result, StatusClass, StatusDecoder, StatusKey,
    TextErrorDecoder, Validate, ValidatedDecoder, ValidatedEncoder, from_json, to_form, to_json,
};

pub use url;
