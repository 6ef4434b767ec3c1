// File: crates/prometheus-render/src/run.rs
// Summary: The pipeline: resolve window, query, optional markers, build chart, write PNG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use prom_client::{PromClient, RangeQuery, TimeSeries};
use render_core::{Axis, Chart, Marker, RenderOptions, Series, Theme};
use tracing::{info, warn};

use crate::cli::Args;
use crate::markers::{fetch_events, Event};
use crate::range::{default_step, TimeWindow};

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub series: usize,
    pub markers: usize,
    pub output: PathBuf,
}

pub fn run(args: &Args) -> Result<Summary> {
    let window = TimeWindow::ending_now(args.range);
    let step = args.step.clone().unwrap_or_else(|| default_step(args.range).to_string());
    let client = PromClient::new(args.url.as_str())?;

    let series = client.query_range(&RangeQuery::new(args.query.as_str(), window.start, window.end, step.as_str()))?;
    if series.is_empty() {
        bail!("No data returned for query: {}", args.query);
    }
    info!(series = series.len(), query = %args.query, "fetched series");

    let events = match &args.vlines_query {
        Some(vq) => fetch_events(&client, &RangeQuery::new(vq.as_str(), window.start, window.end, step.as_str())),
        None => Vec::new(),
    };

    let chart = build_chart(&series, &events, &window, &args.title);
    let opts = render_options(args);
    chart
        .render_to_png(&opts, &args.output)
        .with_context(|| format!("Error writing PNG to {}", args.output.display()))?;

    let summary = Summary { series: series.len(), markers: events.len(), output: args.output.clone() };
    info!(series = summary.series, markers = summary.markers, output = %summary.output.display(), "rendered chart");
    Ok(summary)
}

/// Chart model for `series` over `window`, axes fitted to the data.
pub fn build_chart(series: &[TimeSeries], events: &[Event], window: &TimeWindow, title: &str) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::time(window.tick_format());
    for s in series {
        chart.add_series(Series::with_data(s.label(), s.points()));
    }
    for e in events {
        chart.add_marker(Marker::from(e));
    }
    chart.set_title(title);
    chart.autoscale_axes();
    chart
}

pub fn render_options(args: &Args) -> RenderOptions {
    RenderOptions {
        width: args.width,
        height: args.height,
        theme: resolve_theme(&args.style),
        ..RenderOptions::default()
    }
}

/// Named theme, or the light default with a warning.
pub fn resolve_theme(style: &str) -> Theme {
    Theme::by_name(style).unwrap_or_else(|| {
        warn!("unknown style '{style}', falling back to default.");
        Theme::light()
    })
}
