// crates/core/src/output/csv.rs
use std::{io::Write, path::Path};

use log::debug;

use crate::{
    document::{Document, RecordSelector},
    error::Result,
    output::file::write_atomically,
    projection::Projection,
};

/// Writes projected records as CSV rows.
#[derive(Debug, Clone)]
pub struct CsvSink<'a> {
    projection: &'a Projection,
    header: bool,
}

impl<'a> CsvSink<'a> {
    pub fn new(projection: &'a Projection) -> Self {
        Self {
            projection,
            header: false,
        }
    }

    /// Emit the column paths as a first row.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Write one row per selected record to `writer`.
    /// Returns the number of record rows written.
    pub fn write_to<W: Write>(
        &self,
        writer: W,
        doc: &Document,
        selector: &RecordSelector,
    ) -> Result<usize> {
        let mut out = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        if self.header {
            out.write_record(self.projection.header())?;
        }
        let mut rows = 0;
        for row in self.projection.rows(doc, selector) {
            out.write_record(&row)?;
            rows += 1;
        }
        out.flush().map_err(csv::Error::from)?;
        Ok(rows)
    }

    /// Create or replace the CSV file at `path`.
    ///
    /// Nothing is left at `path` unless every row was written.
    pub fn write_file(
        &self,
        path: &Path,
        doc: &Document,
        selector: &RecordSelector,
    ) -> Result<usize> {
        let rows = write_atomically(path, |w| self.write_to(w, doc, selector))?;
        debug!("wrote {rows} row(s) to {}", path.display());
        Ok(rows)
    }
}
