// File: crates/prometheus-render/src/lib.rs
// Summary: Query -> fetch -> plot -> save pipeline behind the prometheus-render binary.

pub mod cli;
pub mod logging;
pub mod markers;
pub mod range;
pub mod run;

pub use cli::Args;
pub use run::{run, Summary};
