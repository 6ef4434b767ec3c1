// File: crates/prom-client/src/query.rs
// Summary: Range query parameters as sent to /api/v1/query_range.

/// A PromQL expression evaluated over `start..=end` every `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    pub query: String,
    /// Unix seconds, inclusive.
    pub start: f64,
    /// Unix seconds, inclusive.
    pub end: f64,
    /// Float seconds or a Prometheus duration (`30s`, `5m`); sent verbatim.
    pub step: String,
}

impl RangeQuery {
    pub fn new(query: impl Into<String>, start: f64, end: f64, step: impl Into<String>) -> Self {
        Self { query: query.into(), start, end, step: step.into() }
    }

    /// HTTP GET parameters, timestamps with millisecond precision.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("start", format!("{:.3}", self.start)),
            ("end", format!("{:.3}", self.end)),
            ("step", self.step.clone()),
        ]
    }
}
