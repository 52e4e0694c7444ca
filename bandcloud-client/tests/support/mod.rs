//! Shared test support: an in-memory transport and tracing setup.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use bandcloud_client::{BandClient, BandError, Credential, Transport};
use bandcloud_http::{InboundResponse, OutboundRequest, ResponseBody};
use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::StatusCode;

pub const BASE_URL: &str = "https://api.example.com/v1/me";

static TRACING: Once = Once::new();

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Counting body
// ============================================================================

/// Response body that counts how often it is released.
pub struct CountingBody {
    data: Bytes,
    releases: Arc<AtomicUsize>,
}

impl Drop for CountingBody {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

impl ResponseBody for CountingBody {
    fn read_all(self: Box<Self>) -> BoxFuture<'static, Result<Bytes, BandError>> {
        let data = self.data.clone();
        Box::pin(async move { Ok(data) })
    }
}

// ============================================================================
// Mock transport
// ============================================================================

/// Answers requests from a queue of canned replies and records what it saw.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<(StatusCode, &'static str)>>,
    sent: Mutex<Vec<OutboundRequest>>,
    releases: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a reply.
    pub fn reply(&self, status: u16, body: &'static str) -> &Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.replies.lock().unwrap().push_back((status, body));
        self
    }

    /// Requests seen so far.
    pub fn sent(&self) -> Vec<OutboundRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of response bodies released.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, BandError> {
        self.sent.lock().unwrap().push(request);
        let (status, body) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BandError::Transport("no reply queued".to_string()))?;

        Ok(InboundResponse::new(
            status,
            CountingBody {
                data: Bytes::from_static(body.as_bytes()),
                releases: self.releases.clone(),
            },
        ))
    }
}

/// Builds a client that sends through `transport` with a fixed token.
pub fn client_with(transport: &Arc<MockTransport>) -> BandClient {
    init_tracing();
    BandClient::builder()
        .base_url(BASE_URL)
        .credential(Credential::new("test-token"))
        .transport(transport.clone())
        .build()
        .unwrap()
}
