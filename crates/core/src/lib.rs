#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Filter, sort and flatten XML record collections into CSV.
//!
//! A [`Document`] is a root element holding a flat list of same-shaped
//! records. The stages ([`DateRangeFilter`], [`TextFilter`], [`SortSpec`],
//! [`CsvSink`]) each make one pass over those records, mutating the document
//! in place; [`Pipeline`] strings them together from a [`PipelineConfig`].

pub mod config;
pub mod dates;
pub mod document;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod projection;
pub mod sort;

pub use config::{ColumnConfig, PipelineConfig, PipelineConfigBuilder};
pub use document::{Document, FieldPath, Record, RecordSelector};
pub use error::{Result, SiftError};
pub use fetch::{Source, fetch_document};
pub use filter::{DateRangeFilter, TextFilter};
pub use output::CsvSink;
pub use pipeline::{Pipeline, RunSummary};
pub use projection::{Column, Projection};
pub use sort::{SortKey, SortOrder, SortSpec, sort_records, try_sort_records};
