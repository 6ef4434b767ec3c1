// File: crates/render-core/src/view.rs
// Summary: Visible ranges computed from chart data (autoscale).

use crate::Chart;

/// Fraction of the y span added above and below the data.
pub const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Bounds of every finite point and marker position in `chart`.
    /// Degenerate spans widen to 1; an empty chart maps to `0..1` on both axes.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        for m in chart.markers.iter().filter(|m| m.x.is_finite()) {
            x_min = x_min.min(m.x);
            x_max = x_max.max(m.x);
        }

        if !x_min.is_finite() || !x_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            // markers only
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 {
            y_min -= 0.5;
            y_max += 0.5;
        }
        let ym = (y_max - y_min) * Y_MARGIN;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
