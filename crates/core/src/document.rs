// crates/core/src/document.rs
//! In-memory record document.
//!
//! A [`Document`] owns the parsed XML root. Its direct children selected by a
//! [`RecordSelector`] are the records; [`FieldPath`] locates a field below a
//! record. Stages mutate the document in place through the crate-private
//! helpers at the bottom of this file.

use std::{borrow::Cow, fmt, io::Read, str::FromStr};

use xmltree::{Element, XMLNode};

use crate::error::{Result, SiftError};

/// One record of the collection: a direct child element of the root.
pub type Record = Element;

/// Owned XML document whose root holds a flat list of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse an in-memory XML string.
    pub fn parse_str(xml: &str) -> Result<Self> {
        Self::from_reader(xml.as_bytes(), "<memory>")
    }

    /// Parse XML from any reader. `location` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, location: &str) -> Result<Self> {
        Element::parse(reader)
            .map(Self::new)
            .map_err(|source| SiftError::Parse {
                location: location.to_string(),
                source,
            })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Records selected by `selector`, in document order.
    pub fn records<'a>(
        &'a self,
        selector: &'a RecordSelector,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.root
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(move |e| selector.matches(e))
    }

    pub fn record_count(&self, selector: &RecordSelector) -> usize {
        self.records(selector).count()
    }

    /// Drop every selected record whose entry in `keep` is `false`.
    ///
    /// `keep` holds one flag per selected record, in document order.
    /// Returns the number of removed records.
    pub(crate) fn retain_records(&mut self, selector: &RecordSelector, keep: &[bool]) -> usize {
        let before = self.root.children.len();
        let mut flags = keep.iter().copied();
        self.root.children.retain(|node| match node {
            XMLNode::Element(e) if selector.matches(e) => flags.next().unwrap_or(true),
            _ => true,
        });
        before - self.root.children.len()
    }

    /// Detach every selected record, leaving the other children in place.
    pub(crate) fn take_records(&mut self, selector: &RecordSelector) -> Vec<Record> {
        let children = std::mem::take(&mut self.root.children);
        let mut records = Vec::new();
        for node in children {
            match node {
                XMLNode::Element(e) if selector.matches(&e) => records.push(e),
                other => self.root.children.push(other),
            }
        }
        records
    }

    pub(crate) fn append_records(&mut self, records: Vec<Record>) {
        self.root
            .children
            .extend(records.into_iter().map(XMLNode::Element));
    }
}

impl FromStr for Document {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

/// Which children of the root count as records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    /// Every child element.
    Any,
    /// Child elements with this tag.
    Tag(String),
}

impl RecordSelector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    #[inline]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(tag) => element.name == *tag,
        }
    }
}

impl FromStr for RecordSelector {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let tag = trimmed.strip_prefix("./").unwrap_or(trimmed);
        if tag == "*" {
            return Ok(Self::Any);
        }
        if tag.is_empty() {
            return Err(SiftError::invalid("record selector", s, "empty tag"));
        }
        if tag.contains('/') {
            return Err(SiftError::invalid(
                "record selector",
                s,
                "records must be direct children of the root",
            ));
        }
        Ok(Self::Tag(tag.to_string()))
    }
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Slash-separated locator from a record to one of its descendants.
///
/// Each step picks the first child element with that tag. An empty path
/// (written `.`) points at the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    steps: Vec<String>,
}

impl FieldPath {
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Follow the path from `record`. `None` if any step is missing.
    pub fn resolve<'a>(&self, record: &'a Element) -> Option<&'a Element> {
        self.steps
            .iter()
            .try_fold(record, |current, step| current.get_child(step.as_str()))
    }

    /// Like [`FieldPath::resolve`], but a missing step is a `MissingField` error.
    pub(crate) fn require<'a>(
        &self,
        record: &'a Element,
        selector: &RecordSelector,
        position: usize,
    ) -> Result<&'a Element> {
        self.resolve(record).ok_or_else(|| SiftError::MissingField {
            selector: selector.to_string(),
            path: self.to_string(),
            position,
        })
    }
}

impl FromStr for FieldPath {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SiftError::invalid("field path", s, "empty path"));
        }
        if trimmed == "." {
            return Ok(Self { steps: Vec::new() });
        }
        let body = trimmed.strip_prefix("./").unwrap_or(trimmed);
        let mut steps = Vec::new();
        for step in body.split('/') {
            match step {
                "" => return Err(SiftError::invalid("field path", s, "empty step")),
                "." | ".." => {
                    return Err(SiftError::invalid(
                        "field path",
                        s,
                        "relative steps are only allowed as a leading './'",
                    ));
                }
                _ => steps.push(step.to_string()),
            }
        }
        Ok(Self { steps })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            f.write_str(".")
        } else {
            f.write_str(&self.steps.join("/"))
        }
    }
}

/// Direct text of `element`, or `None` when it has no text or CDATA children.
///
/// The parser drops whitespace-only character data, so `<W>   </W>` has no
/// text here.
pub fn element_text(element: &Element) -> Option<Cow<'_, str>> {
    element.get_text()
}

/// Direct text of `element`, with absent text read as the empty string.
pub fn element_text_or_empty(element: &Element) -> String {
    element_text(element).map(Cow::into_owned).unwrap_or_default()
}
