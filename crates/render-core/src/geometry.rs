// File: crates/render-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left over after removing `insets` from a `width` x `height` image.
    /// Collapses to a one pixel rect when the insets do not fit.
    pub fn plot_area(width: u32, height: u32, insets: &Insets) -> Self {
        let left = insets.left.min(width.saturating_sub(1)) as i32;
        let top = insets.top.min(height.saturating_sub(1)) as i32;
        let right = (width.saturating_sub(insets.right) as i32).max(left + 1);
        let bottom = (height.saturating_sub(insets.bottom) as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Map `v` in `min..max` onto `left..right`.
    #[inline]
    pub fn x_to_px(&self, v: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.left as f32 + ((v - min) / span) as f32 * self.width() as f32
    }

    /// Map `v` in `min..max` onto `bottom..top` (y grows upwards).
    #[inline]
    pub fn y_to_px(&self, v: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.bottom as f32 - ((v - min) / span) as f32 * self.height() as f32
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
