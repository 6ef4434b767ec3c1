// File: crates/render-core/src/series.rs
// Summary: Line series and vertical marker models.

/// A named line of `(x, y)` points. Non-finite values leave a gap in the line.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
}

impl Series {
    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, stroke_width: 2.0 }
    }

    /// Points where both coordinates are finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Vertical line across the plot area at `x`, e.g. a deployment event.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub label: String,
}

impl Marker {
    pub fn new(x: f64, label: impl Into<String>) -> Self {
        Self { x, label: label.into() }
    }
}
