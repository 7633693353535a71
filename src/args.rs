// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// Every flag is optional; with none given the built-in listings pipeline
/// runs unchanged.
#[derive(Parser, Debug, Default)]
#[command(
    name = "xmlsift",
    version = crate::VERSION,
    about = "Filter, sort and flatten an XML record feed into CSV"
)]
pub struct Args {
    /// Pipeline description (JSON, or YAML with the `yaml` feature)
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override the document source (http(s) URL, file:// URL or path)
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Override the CSV output path
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Write the column paths as a header row
    #[arg(long)]
    pub header: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
