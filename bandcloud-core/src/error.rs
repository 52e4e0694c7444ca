//! Core error types for `BandCloud`.

use thiserror::Error;

/// Core error type for `BandCloud` domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A summary period the API does not offer.
    #[error("Unknown summary period: {0}")]
    UnknownPeriod(String),
}
