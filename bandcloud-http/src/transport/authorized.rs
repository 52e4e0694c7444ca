//! Transport decorator that authorizes every request.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use std::fmt;
use std::sync::Arc;

use super::{InboundResponse, Transport};
use crate::credential::TokenSource;
use crate::error::{AuthError, BandError};
use crate::request::OutboundRequest;

const APPLICATION_JSON: &str = "application/json";

/// Wraps a transport so every request carries a bearer credential.
///
/// The credential is fetched before the inner transport is called; if the
/// token source fails, nothing is sent.
pub struct AuthorizedTransport<T> {
    inner: T,
    tokens: Arc<dyn TokenSource>,
}

impl<T: Transport> AuthorizedTransport<T> {
    /// Decorates `inner` with credentials from `tokens`.
    pub fn new(inner: T, tokens: Arc<dyn TokenSource>) -> Self {
        Self { inner, tokens }
    }

    /// Returns the wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for AuthorizedTransport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedTransport")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthorizedTransport<T> {
    async fn send(&self, mut request: OutboundRequest) -> Result<InboundResponse, BandError> {
        let credential = self.tokens.token().await?;

        let mut authorization = HeaderValue::from_str(&credential.authorization_value())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        authorization.set_sensitive(true);

        let has_body = request.body().is_some();
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static(APPLICATION_JSON));
        if has_body {
            headers
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(APPLICATION_JSON));
        }

        self.inner.send(request).await
    }
}

// ============================================================================
// Tests
// ============================================================================
