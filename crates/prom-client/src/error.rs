// File: crates/prom-client/src/error.rs
// Summary: Failure modes of a range query, from transport to sample parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("error querying Prometheus: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Prometheus returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Prometheus error: {error}")]
    Api { error_type: String, error: String },
    #[error("malformed response from Prometheus: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Prometheus response has no data")]
    MissingData,
    #[error("expected a matrix result, got {0}")]
    UnexpectedResultType(String),
    #[error("invalid sample value {value:?}")]
    InvalidSample { value: String },
}
