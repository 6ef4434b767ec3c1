// File: crates/prometheus-render/src/range.rs
// Summary: Human time ranges ("24h", "7d"), the default step and the query window.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)([smhdw])$").expect("static regex"));

/// Samples per chart the default step aims for.
pub const TARGET_POINTS: u64 = 300;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid range format: {0} (expected e.g. 1h, 24h, 7d)")]
pub struct RangeError(pub String);

/// Parse `<count><unit>` with unit `s`, `m`, `h`, `d` or `w` into seconds.
pub fn parse_range(s: &str) -> Result<u64, RangeError> {
    let err = || RangeError(s.to_string());
    let caps = RANGE_RE.captures(s).ok_or_else(err)?;
    let mult = match &caps[2] {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        "w" => 604_800,
        _ => return Err(err()),
    };
    caps[1].parse::<u64>().ok().and_then(|n| n.checked_mul(mult)).ok_or_else(err)
}

/// Step in whole seconds giving about [`TARGET_POINTS`] samples, at least 1.
pub fn default_step(range_secs: u64) -> u64 {
    (range_secs / TARGET_POINTS).max(1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
    pub range_secs: u64,
}

impl TimeWindow {
    pub fn ending_now(range_secs: u64) -> Self {
        let end = Utc::now().timestamp_millis() as f64 / 1000.0;
        Self::ending_at(end, range_secs)
    }

    pub fn ending_at(end: f64, range_secs: u64) -> Self {
        Self { start: end - range_secs as f64, end, range_secs }
    }

    /// Clock time for windows up to a day, month-day beyond.
    pub fn tick_format(&self) -> &'static str {
        if self.range_secs <= 86_400 { "%H:%M" } else { "%m-%d" }
    }
}
