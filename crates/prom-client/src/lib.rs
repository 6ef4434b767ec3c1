// File: crates/prom-client/src/lib.rs
// Summary: Prometheus HTTP API client for range queries; exports query, client and series types.

pub mod client;
pub mod error;
pub mod query;
pub mod response;

pub use client::{PromClient, DEFAULT_TIMEOUT};
pub use error::QueryError;
pub use query::RangeQuery;
pub use response::{decode_range_response, Sample, TimeSeries};
