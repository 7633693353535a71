// crates/core/src/filter/date.rs
use log::debug;

use crate::{
    dates::{DateWindow, parse_timestamp},
    document::{Document, FieldPath, RecordSelector, element_text},
    error::Result,
};

/// Removes records whose date field falls outside a `[start, end)` window.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    selector: RecordSelector,
    path: FieldPath,
    window: DateWindow,
    format: String,
}

impl DateRangeFilter {
    /// Build a filter, parsing both bounds with `format`.
    pub fn new(
        selector: RecordSelector,
        path: FieldPath,
        start: &str,
        end: &str,
        format: impl Into<String>,
    ) -> Result<Self> {
        let format = format.into();
        let window = DateWindow::parse(start, end, &format)?;
        Ok(Self {
            selector,
            path,
            window,
            format,
        })
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Remove every out-of-window record. Returns how many were removed.
    ///
    /// All records are checked before any is removed, so an error leaves
    /// `doc` untouched.
    pub fn apply(&self, doc: &mut Document) -> Result<usize> {
        let keep = doc
            .records(&self.selector)
            .enumerate()
            .map(|(position, record)| {
                let field = self.path.require(record, &self.selector, position)?;
                let text = element_text(field).unwrap_or_default();
                let value = parse_timestamp(&text, &self.format)?;
                Ok(self.window.contains(value))
            })
            .collect::<Result<Vec<_>>>()?;

        let removed = doc.retain_records(&self.selector, &keep);
        debug!(
            "date filter on '{}' [{}, {}): kept {}, removed {removed}",
            self.path,
            self.window.start,
            self.window.end,
            keep.len() - removed
        );
        Ok(removed)
    }
}
