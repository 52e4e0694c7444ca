//! Response decoding.
//!
//! Both entry points take the [`InboundResponse`] by value, so the body is
//! read at most once and released when the call returns, on every path.

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{BandError, truncate};
use crate::transport::InboundResponse;

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 1024;

/// Checks the status and decodes the JSON body into `T`.
///
/// Outside 2xx this fails with [`BandError::HttpStatus`] without parsing
/// the body as JSON.
pub async fn decode<T: DeserializeOwned>(response: InboundResponse) -> Result<T, BandError> {
    let response = check_status(response).await?;
    let bytes = response.into_body().read_all().await?;
    trace!(len = bytes.len(), "Decoding response body");
    serde_json::from_slice(&bytes).map_err(BandError::Decode)
}

/// Checks the status and discards the body unread.
pub async fn discard(response: InboundResponse) -> Result<(), BandError> {
    check_status(response).await.map(drop)
}

/// Passes a 2xx response through; turns anything else into an error.
async fn check_status(response: InboundResponse) -> Result<InboundResponse, BandError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Diagnostics only; a failed read still yields the status error.
    let mut body = match response.into_body().read_all().await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    };
    truncate(&mut body, MAX_ERROR_BODY);

    Err(BandError::HttpStatus { status, body })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ResponseBody;
    use bytes::Bytes;
    use futures::future::BoxFuture;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        name: String,
        count: u32,
    }

    /// Body that counts reads and releases.
    struct TrackedBody {
        data: Bytes,
        reads: Arc<AtomicUsize>,
        releases: Arc<AtomicUsize>,
    }

    impl Drop for TrackedBody {
        fn drop(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ResponseBody for TrackedBody {
        fn read_all(self: Box<Self>) -> BoxFuture<'static, Result<Bytes, BandError>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let data = self.data.clone();
            Box::pin(async move { Ok(data) })
        }
    }

    struct Tracker {
        reads: Arc<AtomicUsize>,
        releases: Arc<AtomicUsize>,
    }

    fn tracked(status: StatusCode, body: &'static str) -> (InboundResponse, Tracker) {
        let reads = Arc::new(AtomicUsize::new(0));
        let releases = Arc::new(AtomicUsize::new(0));
        let response = InboundResponse::new(
            status,
            TrackedBody {
                data: Bytes::from_static(body.as_bytes()),
                reads: reads.clone(),
                releases: releases.clone(),
            },
        );
        (response, Tracker { reads, releases })
    }

    #[tokio::test]
    async fn test_decode_success() {
        let (response, tracker) = tracked(StatusCode::OK, r#"{"name":"a","count":3}"#);
        let record: Record = decode(response).await.unwrap();
        assert_eq!(
            record,
            Record {
                name: "a".to_string(),
                count: 3
            }
        );
        assert_eq!(tracker.reads.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_decode_accepts_whole_success_range() {
        for code in [200, 201, 204, 299] {
            let status = StatusCode::from_u16(code).unwrap();
            let (response, _) = tracked(status, r#"{"name":"a","count":1}"#);
            assert!(decode::<Record>(response).await.is_ok(), "status {}", code);
        }
    }

    #[tokio::test]
    async fn test_status_error_ignores_body_shape() {
        for (code, body) in [
            (404, r#"{"name":"a","count":1}"#),
            (500, "<html>oops</html>"),
            (199, ""),
            (300, "moved"),
        ] {
            let status = StatusCode::from_u16(code).unwrap();
            let (response, tracker) = tracked(status, body);
            match decode::<Record>(response).await {
                Err(BandError::HttpStatus { status: got, body: text }) => {
                    assert_eq!(got.as_u16(), code);
                    assert_eq!(text, body);
                }
                other => panic!("expected status error for {}, got {:?}", code, other),
            }
            assert_eq!(tracker.releases.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let (response, tracker) = tracked(StatusCode::OK, r#"{"name": "#);
        let result = decode::<Record>(response).await;
        assert!(matches!(result, Err(BandError::Decode(_))));
        assert_eq!(tracker.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        let (response, _) = tracked(StatusCode::OK, r#"{"name": 5, "count": "x"}"#);
        assert!(matches!(
            decode::<Record>(response).await,
            Err(BandError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_discard_does_not_read() {
        let (response, tracker) = tracked(StatusCode::OK, "not json at all");
        discard(response).await.unwrap();
        assert_eq!(tracker.reads.load(Ordering::SeqCst), 0);
        assert_eq!(tracker.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_discard_still_checks_status() {
        let (response, tracker) = tracked(StatusCode::UNAUTHORIZED, "");
        let err = discard(response).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(tracker.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_long_error_body_is_truncated() {
        let long = "x".repeat(MAX_ERROR_BODY * 2);
        let response = InboundResponse::new(StatusCode::BAD_REQUEST, Bytes::from(long));
        match decode::<Record>(response).await {
            Err(BandError::HttpStatus { body, .. }) => assert_eq!(body.len(), MAX_ERROR_BODY),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
