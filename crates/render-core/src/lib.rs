// File: crates/render-core/src/lib.rs
// Summary: Core library entry point; exports the chart model and headless rendering API.

pub mod axis;
pub mod chart;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, TickFormat};
pub use chart::{Chart, RenderOptions};
pub use downsample::{finite_runs, lttb, prepare_line};
pub use error::RenderError;
pub use series::{Marker, Series};
pub use text::{Align, TextShaper};
pub use theme::Theme;
pub use view::ViewState;
