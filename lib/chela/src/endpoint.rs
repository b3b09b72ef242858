//! Typed endpoint bindings.
//!
//! An [`Endpoint`] ties a method and path to a request and a response type
//! once, so call sites stay a one-liner and the body shapes are resolved at
//! binding time rather than on every call.

use std::any::TypeId;
use std::borrow::Cow;
use std::marker::PhantomData;

use chela_core::{HttpClient, Method, NoContent, RequestValue, ResponseValue, Result};

use crate::{ApiClient, CallHeaders};

/// A reusable binding of method, path, request type, and response type.
///
/// Use [`NoContent`] for a side with no payload: the request body is
/// skipped entirely, and the response body is discarded without decoding.
/// Whether a side carries a payload is decided once when the endpoint is
/// constructed.
///
/// # Example
///
/// ```ignore
/// use chela::{CallHeaders, Endpoint, NoContent};
///
/// let create: Endpoint<CreateWidget, Widget> = Endpoint::post("/widgets");
/// let delete: Endpoint<NoContent, NoContent> = Endpoint::delete("/widgets/42");
///
/// let widget = create.call(&CallHeaders::new(), &client, req).await?;
/// delete.call(&CallHeaders::new(), &client, NoContent).await?;
/// ```
pub struct Endpoint<Req, Resp> {
    method: Method,
    path: Cow<'static, str>,
    sends_body: bool,
    expects_body: bool,
    _marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Endpoint<Req, Resp>
where
    Req: RequestValue + 'static,
    Resp: ResponseValue + Default + 'static,
{
    /// Binds a method and path to the `Req`/`Resp` type pair.
    #[must_use]
    pub fn new(method: Method, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            path: path.into(),
            sends_body: TypeId::of::<Req>() != TypeId::of::<NoContent>(),
            expects_body: TypeId::of::<Resp>() != TypeId::of::<NoContent>(),
            _marker: PhantomData,
        }
    }

    /// Binds a `GET` endpoint.
    #[must_use]
    pub fn get(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Binds a `POST` endpoint.
    #[must_use]
    pub fn post(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Binds a `PUT` endpoint.
    #[must_use]
    pub fn put(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Binds a `DELETE` endpoint.
    #[must_use]
    pub fn delete(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Binds a `PATCH` endpoint.
    #[must_use]
    pub fn patch(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// The bound method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The bound path, relative to the client's base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Calls the endpoint through `client` with the given scoped headers.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ApiClient::call`]: URL construction,
    /// encoding, transport, and decoding.
    pub async fn call<C: HttpClient>(
        &self,
        scope: &CallHeaders,
        client: &ApiClient<C>,
        body: Req,
    ) -> Result<Resp> {
        let body_ref: Option<&dyn RequestValue> = if self.sends_body {
            Some(&body)
        } else {
            None
        };

        let mut out = Resp::default();
        let slot: Option<&mut dyn ResponseValue> = if self.expects_body {
            Some(&mut out)
        } else {
            None
        };

        client
            .call(scope, self.method, &self.path, body_ref, slot)
            .await?;
        Ok(out)
    }
}

impl<Req, Resp> Clone for Endpoint<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            sends_body: self.sends_body,
            expects_body: self.expects_body,
            _marker: PhantomData,
        }
    }
}

impl<Req, Resp> std::fmt::Debug for Endpoint<Req, Resp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("sends_body", &self.sends_body)
            .field("expects_body", &self.expects_body)
            .finish()
    }
}
