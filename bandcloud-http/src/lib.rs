// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `BandCloud` HTTP
//!
//! The request pipeline behind the Band cloud client.
//!
//! A call flows through four stages:
//!
//! 1. [`credential`] - A [`TokenSource`] supplies a bearer credential,
//!    refreshing it through [`OAuthRefresher`] when it has expired
//! 2. [`request`] - [`RequestBuilder`] turns a resource path and optional
//!    body into an [`OutboundRequest`]
//! 3. [`transport`] - A [`Transport`] sends it; [`AuthorizedTransport`]
//!    decorates any transport with the credential
//! 4. [`decode`] - [`decode()`] checks the status and parses the JSON body
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bandcloud_http::{
//!     AuthorizedTransport, Credential, RequestBuilder, ReqwestTransport,
//!     StaticTokenSource, Transport, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
//! };
//!
//! let transport = AuthorizedTransport::new(
//!     ReqwestTransport::new()?,
//!     Arc::new(StaticTokenSource::new(Credential::new("EwB4Aq1D..."))),
//! );
//! let requests = RequestBuilder::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT)?;
//!
//! let response = transport.send(requests.get("/Profile")?).await?;
//! let profile: serde_json::Value = bandcloud_http::decode(response).await?;
//! ```

pub mod config;
pub mod credential;
pub mod decode;
pub mod error;
pub mod oauth;
pub mod request;
pub mod transport;

// Re-export key types at crate root

// Errors
pub use error::{AuthError, BandError};

// Configuration
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_URL, DEFAULT_USER_AGENT, OAuthConfig,
};

// Credentials
pub use credential::{
    Credential, RefreshingTokenSource, StaticTokenSource, TokenRefresher, TokenSource,
};
pub use oauth::OAuthRefresher;

// Pipeline
pub use decode::{decode, discard};
pub use request::{OutboundRequest, RequestBuilder};
pub use transport::{
    InboundResponse, ResponseBody, Transport, authorized::AuthorizedTransport,
    http::ReqwestTransport,
};
