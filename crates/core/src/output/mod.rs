// crates/core/src/output/mod.rs
pub mod csv;
pub mod file;

pub use self::csv::CsvSink;
pub use self::file::write_atomically;
