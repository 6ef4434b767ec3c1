// File: crates/prom-client/src/response.rs
// Summary: JSON envelope of the Prometheus HTTP API and its decoding into numeric series.
//
// A range query answers with:
//   {"status":"success","data":{"resultType":"matrix","result":[
//       {"metric":{"__name__":"up","job":"node"},"values":[[1700000000,"1"],...]}]}}
// or, on failure:
//   {"status":"error","errorType":"bad_data","error":"parse error ..."}

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::error::QueryError;

/// Labels left out of a series' display name.
const HIDDEN_LABELS: [&str; 3] = ["__name__", "job", "instance"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Option<ResultData>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "resultType", rename_all = "lowercase")]
enum ResultData {
    Matrix { result: Vec<RawSeries> },
    Vector {},
    Scalar {},
    #[serde(rename = "string")]
    Text {},
}

impl ResultData {
    fn kind(&self) -> &'static str {
        match self {
            ResultData::Matrix { .. } => "matrix",
            ResultData::Vector {} => "vector",
            ResultData::Scalar {} => "scalar",
            ResultData::Text {} => "string",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    #[serde(default)]
    metric: BTreeMap<String, String>,
    #[serde(default)]
    values: Vec<(f64, String)>,
}

/// One sample: unix seconds and value. `NaN` and `±Inf` are kept as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    pub labels: BTreeMap<String, String>,
    pub samples: Vec<Sample>,
}

impl TimeSeries {
    /// Display name: `k=v` pairs sorted by key without `__name__`, `job` and
    /// `instance`; the metric name when nothing else is left, else `value`.
    pub fn label(&self) -> String {
        let parts: Vec<String> = self
            .labels
            .iter()
            .filter(|(k, _)| !HIDDEN_LABELS.contains(&k.as_str()))
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if parts.is_empty() {
            self.labels.get("__name__").cloned().unwrap_or_else(|| "value".to_string())
        } else {
            parts.join(", ")
        }
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.timestamp, s.value)).collect()
    }
}

impl TryFrom<RawSeries> for TimeSeries {
    type Error = QueryError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let samples = raw
            .values
            .into_iter()
            .map(|(timestamp, v)| match v.trim().parse::<f64>() {
                Ok(value) => Ok(Sample { timestamp, value }),
                Err(_) => Err(QueryError::InvalidSample { value: v }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels: raw.metric, samples })
    }
}

/// Decode a `/api/v1/query_range` body into series.
pub fn decode_range_response(body: &str) -> Result<Vec<TimeSeries>, QueryError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(QueryError::Decode)?;
    for w in &envelope.warnings {
        warn!(warning = %w, "Prometheus returned a warning");
    }
    if envelope.status != "success" {
        return Err(QueryError::Api {
            error_type: envelope.error_type.unwrap_or_default(),
            error: envelope.error.unwrap_or_else(|| "unknown".to_string()),
        });
    }
    match envelope.data {
        Some(ResultData::Matrix { result }) => result.into_iter().map(TimeSeries::try_from).collect(),
        Some(other) => Err(QueryError::UnexpectedResultType(other.kind().to_string())),
        None => Err(QueryError::MissingData),
    }
}
