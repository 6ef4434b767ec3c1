// File: crates/prometheus-render/src/cli.rs
// Summary: Command-line flags.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::range::parse_range;

/// Runtime and build-time override for the `--version` string.
pub const VERSION_ENV: &str = "PROMETHEUS_RENDER_VERSION";

/// Compiled-in fallback: the build-time stamp, else the crate version.
const BUILD_VERSION: &str = match option_env!("PROMETHEUS_RENDER_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// `PROMETHEUS_RENDER_VERSION` from the environment if set and non-empty,
/// otherwise the compiled-in version.
pub fn version() -> String {
    resolve_version(std::env::var(VERSION_ENV).ok())
}

fn resolve_version(from_env: Option<String>) -> String {
    from_env
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| BUILD_VERSION.to_string())
}

#[derive(Parser, Debug, Clone)]
#[command(name = "prometheus-render", version = version(), about = "Render a PromQL query as a PNG chart.")]
pub struct Args {
    /// Prometheus base URL
    #[arg(long, env = "PROMETHEUS_RENDER_URL", default_value = "http://localhost:9090")]
    pub url: String,

    /// PromQL query expression
    #[arg(long)]
    pub query: String,

    /// Time range ending now (e.g. 1h, 24h, 7d)
    #[arg(long = "range", value_name = "RANGE", default_value = "24h", value_parser = parse_range)]
    pub range: u64,

    /// Chart title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Output PNG file path
    #[arg(long)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub height: u32,

    /// Query resolution step, seconds or a Prometheus duration (default: about 300 points)
    #[arg(long)]
    pub step: Option<String>,

    /// PromQL query for event markers; the first timestamp of each returned
    /// series is drawn as a vertical line (e.g. 'nixos_system_version')
    #[arg(long)]
    pub vlines_query: Option<String>,

    /// Colour theme: dark_background, default, light, dark, solarized-dark,
    /// solarized-light, high-contrast-dark
    #[arg(long, default_value = "dark_background")]
    pub style: String,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
