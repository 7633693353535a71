// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use xmlsift::{args::Args, config};
use xmlsift_core::Pipeline;

fn run(args: &Args) -> Result<()> {
    let config = config::resolve(args)?;
    let pipeline = Pipeline::from_config(&config).context("invalid pipeline")?;

    let summary = pipeline
        .run()
        .with_context(|| format!("failed to process {}", pipeline.source()))?;
    log::info!(
        "wrote {} row(s) to {}",
        summary.rows_written,
        pipeline.output().display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(config::log_level(args.verbose))
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
