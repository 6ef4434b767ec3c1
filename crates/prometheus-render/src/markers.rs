// File: crates/prometheus-render/src/markers.rs
// Summary: Event markers: the first sample time of every series of a second query.

use prom_client::{PromClient, RangeQuery, TimeSeries};
use render_core::Marker;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub timestamp: f64,
    /// `version` label of the series, empty when absent.
    pub version: String,
}

impl From<&Event> for Marker {
    fn from(e: &Event) -> Self {
        Marker::new(e.timestamp, e.version.clone())
    }
}

/// One event per non-empty series, in chronological order.
pub fn events_from_series(series: &[TimeSeries]) -> Vec<Event> {
    let mut events: Vec<Event> = series
        .iter()
        .filter_map(|s| {
            let first = s.samples.first()?;
            Some(Event {
                timestamp: first.timestamp,
                version: s.labels.get("version").cloned().unwrap_or_default(),
            })
        })
        .collect();
    events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    events
}

/// Fetch markers; a failed query only costs the markers.
pub fn fetch_events(client: &PromClient, query: &RangeQuery) -> Vec<Event> {
    match client.query_range(query) {
        Ok(series) => {
            let events = events_from_series(&series);
            for e in &events {
                debug!(timestamp = e.timestamp, version = %e.version, "event marker");
            }
            events
        }
        Err(err) => {
            warn!("could not fetch vlines query: {err}");
            Vec::new()
        }
    }
}
