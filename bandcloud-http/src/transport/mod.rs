//! Transport abstractions.
//!
//! A [`Transport`] sends an [`OutboundRequest`] and returns the raw
//! [`InboundResponse`]. Implementations:
//!
//! - [`http::ReqwestTransport`] - Sends over the network with `reqwest`
//! - [`authorized::AuthorizedTransport`] - Decorator attaching a bearer
//!   credential from a [`TokenSource`](crate::credential::TokenSource)

pub mod authorized;
pub mod http;

use async_trait::async_trait;
use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;

use crate::error::BandError;
use crate::request::OutboundRequest;

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response without inspecting it.
    ///
    /// Non-2xx statuses are not errors at this layer.
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, BandError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, BandError> {
        (**self).send(request).await
    }
}

// ============================================================================
// Response Body
// ============================================================================

/// A response body that can be read once.
///
/// Reading consumes the body; dropping it unread releases it.
pub trait ResponseBody: Send {
    /// Reads the whole body.
    fn read_all(self: Box<Self>) -> BoxFuture<'static, Result<Bytes, BandError>>;
}

impl ResponseBody for Bytes {
    fn read_all(self: Box<Self>) -> BoxFuture<'static, Result<Bytes, BandError>> {
        Box::pin(async move { Ok(*self) })
    }
}

impl ResponseBody for reqwest::Response {
    fn read_all(self: Box<Self>) -> BoxFuture<'static, Result<Bytes, BandError>> {
        Box::pin(async move { Ok((*self).bytes().await?) })
    }
}

// ============================================================================
// Inbound Response
// ============================================================================

/// A response as returned by a transport.
pub struct InboundResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Box<dyn ResponseBody>,
}

impl InboundResponse {
    /// Creates a response with no headers.
    pub fn new(status: StatusCode, body: impl ResponseBody + 'static) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::new(body),
        }
    }

    /// Sets the response headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Takes the body.
    pub fn into_body(self) -> Box<dyn ResponseBody> {
        self.body
    }
}

impl fmt::Debug for InboundResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InboundResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
