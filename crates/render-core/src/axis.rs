// File: crates/render-core/src/axis.rs
// Summary: Axis model with ranges and tick label formatting.

use chrono::{DateTime, Local};

use crate::grid::{format_value, nice_ticks, time_ticks};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain numbers, rounded to the tick step.
    Number,
    /// Unix seconds rendered in local time with a strftime pattern.
    Time(String),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, format: TickFormat::Number }
    }

    pub fn time(pattern: impl Into<String>) -> Self {
        Self { min: 0.0, max: 1.0, format: TickFormat::Time(pattern.into()) }
    }

    pub fn default_x() -> Self {
        Self::time("%H:%M")
    }

    pub fn default_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Tick positions inside `min..=max`, aiming for about `target` of them.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        match self.format {
            TickFormat::Number => nice_ticks(self.min, self.max, target),
            TickFormat::Time(_) => time_ticks(self.min, self.max, target),
        }
    }

    /// Label for a tick at `v`; `step` is the distance between neighbouring ticks.
    pub fn tick_label(&self, v: f64, step: f64) -> String {
        match &self.format {
            TickFormat::Number => format_value(v, step),
            TickFormat::Time(pattern) => format_local_time(v, pattern),
        }
    }
}

fn format_local_time(ts: f64, pattern: &str) -> String {
    let secs = ts.floor() as i64;
    let nanos = ((ts - ts.floor()) * 1e9) as u32;
    match DateTime::from_timestamp(secs, nanos) {
        Some(utc) => utc.with_timezone(&Local).format(pattern).to_string(),
        None => String::new(),
    }
}
