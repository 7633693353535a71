// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use xmlsift_core::config::PipelineConfig;

/// Resolve the pipeline for `args`: the config file (or the built-in
/// listings pipeline), then the individual flag overrides.
pub fn resolve(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_path(path).map_err(|e| match e {
            xmlsift_core::SiftError::Config { reason } => AppError::Config {
                path: path.clone(),
                reason,
            },
            other => AppError::Sift(other),
        })?,
        None => PipelineConfig::default(),
    };

    if let Some(source) = &args.source {
        config.source.clone_from(source);
    }
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if args.header {
        config.header = true;
    }
    Ok(config)
}

/// Log level for the given `-v` count.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
