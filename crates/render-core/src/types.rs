// File: crates/render-core/src/types.rs
// Summary: Shared types and constants (default image size, plot margins).

/// Default image width in pixels.
pub const WIDTH: u32 = 800;
/// Default image height in pixels.
pub const HEIGHT: u32 = 300;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Extra room at the top for a title line.
    pub const fn with_title_band(self, band: u32) -> Self {
        Self { top: self.top + band, ..self }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 20, 14, 30)
    }
}
