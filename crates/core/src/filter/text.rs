// crates/core/src/filter/text.rs
use log::debug;

use crate::{
    document::{Document, FieldPath, RecordSelector, element_text},
    error::Result,
};

/// Keeps records whose field text contains a substring, ignoring case.
#[derive(Debug, Clone)]
pub struct TextFilter {
    selector: RecordSelector,
    path: FieldPath,
    needle: String,
}

impl TextFilter {
    pub fn new(selector: RecordSelector, path: FieldPath, target: &str) -> Self {
        Self {
            selector,
            path,
            needle: target.to_lowercase(),
        }
    }

    /// Whether `text` passes the filter. Empty text never does.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        !text.is_empty() && text.to_lowercase().contains(&self.needle)
    }

    /// Remove non-matching records. Returns how many were removed.
    ///
    /// A record whose field exists but carries no text is removed; a record
    /// without the field at all is a `MissingField` error and nothing changes.
    pub fn apply(&self, doc: &mut Document) -> Result<usize> {
        let keep = doc
            .records(&self.selector)
            .enumerate()
            .map(|(position, record)| {
                let field = self.path.require(record, &self.selector, position)?;
                Ok(element_text(field).is_some_and(|text| self.matches(&text)))
            })
            .collect::<Result<Vec<_>>>()?;

        let removed = doc.retain_records(&self.selector, &keep);
        debug!(
            "text filter '{}' on '{}': kept {}, removed {removed}",
            self.needle,
            self.path,
            keep.len() - removed
        );
        Ok(removed)
    }
}
