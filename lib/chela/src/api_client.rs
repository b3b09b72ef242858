//! High-level API client: base URL, shared headers, and a codec over a
//! transport.

use std::collections::HashMap;

use chela_core::{Codec, HttpClient, Method, Request, RequestValue, ResponseValue, Result};
use url::Url;

use crate::{CallHeaders, HyperClient};

/// A typed API client bound to one base URL and one [`Codec`].
///
/// The codec is fixed for the client's lifetime; per-call variation happens
/// only through [`CallHeaders`]. The client itself is immutable: header
/// changes go through [`with_header`](Self::with_header), which returns a
/// new client owning a merged copy of the header map, sharing the transport
/// and codec with the original.
///
/// # Example
///
/// ```ignore
/// use chela::{ApiClient, Codec};
///
/// let client = ApiClient::new("https://api.example.com", Codec::json());
/// let client = client.with_header("Authorization", "Bearer token");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<C = HyperClient> {
    transport: C,
    base_url: String,
    headers: HashMap<String, String>,
    codec: Codec,
}

impl ApiClient<HyperClient> {
    /// Creates a client over a default [`HyperClient`] transport.
    #[must_use]
    pub fn new(base_url: impl Into<String>, codec: Codec) -> Self {
        Self::with_transport(base_url, codec, HyperClient::new())
    }
}

impl<C> ApiClient<C> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(base_url: impl Into<String>, codec: Codec, transport: C) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            headers: HashMap::new(),
            codec,
        }
    }

    /// The client's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A reference to the transport.
    #[must_use]
    pub fn transport(&self) -> &C {
        &self.transport
    }
}

impl<C: Clone> ApiClient<C> {
    /// Returns a new client with the given header added.
    ///
    /// The original client is untouched; the new one owns an independent
    /// header map with the addition applied (overriding an existing key).
    #[must_use]
    pub fn with_header(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_headers([(name.into(), value.into())])
    }

    /// Returns a new client with the given headers merged in.
    #[must_use]
    pub fn with_headers(&self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut clone = self.clone();
        clone.headers.extend(headers);
        clone
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Performs one round trip with the given method and path.
    ///
    /// `body`, if present, is run through the codec's encoder before
    /// sending; `out`, if present, receives the decoded response. Headers
    /// are merged lowest to highest: encoder-set defaults, then the client's
    /// stored headers, then `scope` - a key present in a higher set fully
    /// replaces the lower one's value.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`](chela_core::Error::InvalidUrl) if base URL
    ///   plus path does not parse.
    /// - Encoder errors, before anything is sent.
    /// - Transport errors, returned unwrapped; the body is not processed.
    /// - Decoder errors, returned as-is.
    pub async fn call(
        &self,
        scope: &CallHeaders,
        method: Method,
        path: &str,
        body: Option<&dyn RequestValue>,
        out: Option<&mut dyn ResponseValue>,
    ) -> Result<()> {
        let url = Url::parse(&format!("{}{path}", self.base_url))?;
        let mut request = Request::builder(method, url).build();

        if let Some(value) = body {
            self.codec.encode(&mut request, value)?;
        }

        for (name, value) in &self.headers {
            request
                .headers_mut()
                .insert(name.clone(), value.clone());
        }
        for (name, value) in scope.iter() {
            request
                .headers_mut()
                .insert(name.to_owned(), value.to_owned());
        }

        let response = self.transport.execute(request).await?;

        self.codec.decode(&response, out)
    }
}
