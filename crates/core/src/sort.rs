// crates/core/src/sort.rs
use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    dates::parse_timestamp,
    document::{Document, FieldPath, Record, RecordSelector, element_text, element_text_or_empty},
    error::Result,
};

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Desc } else { Self::Asc }
    }
}

/// Stable in-place sort of the selected records by `key`.
///
/// The records are detached, sorted and appended back after the
/// unselected children of the root.
pub fn sort_records<K, F>(doc: &mut Document, selector: &RecordSelector, mut key: F)
where
    K: Ord,
    F: FnMut(&Record) -> K,
{
    let mut records = doc.take_records(selector);
    records.sort_by_cached_key(|r| key(r));
    doc.append_records(records);
}

/// Fallible variant of [`sort_records`].
///
/// Every key is computed before anything moves; the first failing key is
/// returned and the document keeps its original order.
pub fn try_sort_records<K, E, F>(
    doc: &mut Document,
    selector: &RecordSelector,
    order: SortOrder,
    mut key: F,
) -> std::result::Result<(), E>
where
    K: Ord,
    F: FnMut(usize, &Record) -> std::result::Result<K, E>,
{
    let keys = doc
        .records(selector)
        .enumerate()
        .map(|(position, record)| key(position, record))
        .collect::<std::result::Result<Vec<_>, E>>()?;

    let records = doc.take_records(selector);
    let mut keyed: Vec<_> = keys.into_iter().zip(records).collect();
    keyed.sort_by(|(a, _), (b, _)| order.apply(a.cmp(b)));
    doc.append_records(keyed.into_iter().map(|(_, r)| r).collect());
    Ok(())
}

/// What a record is sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Field text compared as a string; absent text sorts as empty.
    Text(FieldPath),
    /// Field text parsed as a timestamp with the given format.
    Date { path: FieldPath, format: String },
}

impl SortKey {
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::Text(path) | Self::Date { path, .. } => path,
        }
    }
}

/// A sort key together with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum KeyValue {
    Text(String),
    Date(chrono::NaiveDateTime),
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Asc)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Desc)
    }

    pub fn key(&self) -> &SortKey {
        &self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Sort the records selected by `selector` in place.
    pub fn apply(&self, doc: &mut Document, selector: &RecordSelector) -> Result<()> {
        try_sort_records(doc, selector, self.order, |position, record| {
            let field = self.key.path().require(record, selector, position)?;
            match &self.key {
                SortKey::Text(_) => Ok(KeyValue::Text(element_text_or_empty(field))),
                SortKey::Date { format, .. } => {
                    let text = element_text(field).unwrap_or_default();
                    parse_timestamp(&text, format).map(KeyValue::Date)
                }
            }
        })?;
        debug!(
            "sorted {} record(s) by '{}' ({:?})",
            doc.record_count(selector),
            self.key.path(),
            self.order
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
