// File: crates/render-core/src/error.rs
// Summary: Error type for chart rendering and PNG output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
