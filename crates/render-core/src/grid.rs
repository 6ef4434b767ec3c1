// File: crates/render-core/src/grid.rs
// Summary: Tick layout helpers for value and time axes, plus value label formatting.

use chrono::DateTime;
use chrono::Local;

/// Candidate time steps in seconds, from one second to four weeks.
const TIME_STEPS: [f64; 22] = [
    1.0, 2.0, 5.0, 10.0, 15.0, 30.0,
    60.0, 120.0, 300.0, 600.0, 900.0, 1800.0,
    3600.0, 7200.0, 10800.0, 21600.0, 43200.0,
    86400.0, 172800.0, 604800.0, 1209600.0, 2419200.0,
];

/// Round `raw` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Upper bound on ticks per axis, as a multiple of the requested count.
const MAX_TICKS_PER_TARGET: usize = 4;

fn tick_cap(target: usize) -> usize {
    target.max(2) * MAX_TICKS_PER_TARGET + 2
}

/// Evenly spaced, nicely rounded ticks covering `min..=max`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let step = nice_step((max - min) / (target.max(2) - 1) as f64);
    let first = (min / step - 1e-9).ceil();
    strictly_increasing((0..tick_cap(target)).map(|k| (first + k as f64) * step), max + step * 1e-9)
}

/// Ticks for a unix-seconds axis, aligned to local wall-clock boundaries.
/// Spans too wide for the largest fixed step use a nice multiple of days.
pub fn time_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let raw = (max - min) / target.max(1) as f64;
    let step = match TIME_STEPS.iter().copied().find(|&s| s >= raw) {
        Some(s) => s,
        None => nice_step(raw / 86_400.0) * 86_400.0,
    };
    let off = local_offset_secs(min);
    let first = ((min + off) / step - 1e-9).ceil() * step - off;
    strictly_increasing((0..tick_cap(target)).map(|k| first + k as f64 * step), max + 1e-6)
}

/// Values up to `limit`, skipping any that do not advance past the previous
/// one (steps below the float resolution at large magnitudes).
fn strictly_increasing(values: impl Iterator<Item = f64>, limit: f64) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    for v in values {
        if v > limit {
            break;
        }
        if out.last().map_or(true, |&prev| v > prev) {
            out.push(v);
        }
    }
    out
}

fn local_offset_secs(ts: f64) -> f64 {
    DateTime::from_timestamp(ts.floor() as i64, 0)
        .map(|utc| utc.with_timezone(&Local).offset().local_minus_utc() as f64)
        .unwrap_or(0.0)
}

/// Decimal places needed to tell ticks `step` apart.
fn decimals_for(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 { return 0; }
    ((-(step.log10() + 1e-9).floor()) as usize).min(9)
}

/// Format a tick value; magnitudes of 10k and up get an SI suffix.
pub fn format_value(v: f64, step: f64) -> String {
    let v = if v.abs() < step.abs() * 1e-6 { 0.0 } else { v };
    let mag = v.abs().max(step.abs());
    for (unit, suffix) in [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")] {
        if mag >= unit && mag >= 1e4 {
            let d = decimals_for(step / unit);
            return format!("{:.*}{}", d, v / unit, suffix);
        }
    }
    format!("{:.*}", decimals_for(step), v)
}
