// crates/core/src/projection.rs
//! Field projection: turns each record into one flat row of strings.

use xmltree::XMLNode;

use crate::{
    document::{Document, FieldPath, Record, RecordSelector, element_text_or_empty},
    error::{Result, SiftError},
};

/// Separator used when an aggregate column joins its children.
pub const AGGREGATE_SEPARATOR: &str = ",";

/// One output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    path: FieldPath,
    aggregate: bool,
}

impl Column {
    pub fn new(path: FieldPath, aggregate: bool) -> Self {
        Self { path, aggregate }
    }

    /// Column holding the text of the field itself.
    pub fn plain(path: FieldPath) -> Self {
        Self::new(path, false)
    }

    /// Column joining the text of every child element of the field.
    pub fn aggregate(path: FieldPath) -> Self {
        Self::new(path, true)
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// Cell value for `record`. Absent fields yield an empty string, and so
    /// do aggregated children that carry no text.
    pub fn value(&self, record: &Record) -> String {
        let Some(field) = self.path.resolve(record) else {
            return String::new();
        };
        if !self.aggregate {
            return element_text_or_empty(field);
        }
        field
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .map(element_text_or_empty)
            .collect::<Vec<_>>()
            .join(AGGREGATE_SEPARATOR)
    }
}

/// Ordered list of columns applied to every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    columns: Vec<Column>,
}

impl Projection {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(SiftError::invalid(
                "column list",
                "[]",
                "at least one column is required",
            ));
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.path.to_string()).collect()
    }

    pub fn project_row(&self, record: &Record) -> Vec<String> {
        self.columns.iter().map(|c| c.value(record)).collect()
    }

    /// Rows for every selected record, in current document order.
    pub fn rows<'a>(
        &'a self,
        doc: &'a Document,
        selector: &'a RecordSelector,
    ) -> impl Iterator<Item = Vec<String>> + 'a {
        doc.records(selector).map(|r| self.project_row(r))
    }
}
