// File: crates/prom-client/src/client.rs
// Summary: Blocking HTTP client for /api/v1/query_range.

use std::time::Duration;

use tracing::debug;

use crate::error::QueryError;
use crate::query::RangeQuery;
use crate::response::{decode_range_response, TimeSeries};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest slice of an error body kept in [`QueryError::Status`].
const BODY_SNIPPET: usize = 200;

pub struct PromClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PromClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, QueryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QueryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("prometheus-render/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/v1/query_range", self.base_url)
    }

    /// Run one range query and decode its matrix result.
    pub fn query_range(&self, query: &RangeQuery) -> Result<Vec<TimeSeries>, QueryError> {
        let url = self.endpoint();
        debug!(%url, query = %query.query, start = query.start, end = query.end, step = %query.step, "querying Prometheus");

        let resp = self.http.get(&url).query(&query.params()).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            // Bad queries come back as 400/422 carrying the usual error envelope.
            return Err(match decode_range_response(&body) {
                Err(api @ QueryError::Api { .. }) => api,
                _ => QueryError::Status { status: status.as_u16(), body: snippet(&body) },
            });
        }

        let series = decode_range_response(&body)?;
        debug!(
            series = series.len(),
            samples = series.iter().map(|s| s.samples.len()).sum::<usize>(),
            "decoded range response"
        );
        Ok(series)
    }
}

fn snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_SNIPPET) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let c = PromClient::new("http://prom:9090/").expect("client");
        assert_eq!(c.base_url(), "http://prom:9090");
        assert_eq!(c.endpoint(), "http://prom:9090/api/v1/query_range");
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        assert_eq!(snippet("  short \n"), "short");
        let long = "x".repeat(500);
        let s = snippet(&long);
        assert_eq!(s.len(), BODY_SNIPPET + 3);
        assert!(s.ends_with("..."));
    }
}
