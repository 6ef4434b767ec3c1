// File: crates/prometheus-render/src/main.rs
// Summary: Binary entry point; parses flags, sets up logging and runs the pipeline once.

use anyhow::Result;
use clap::Parser;
use prometheus_render::{logging, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);
    run(&args)?;
    Ok(())
}
