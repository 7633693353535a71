// crates/core/src/fetch.rs
use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    document::Document,
    error::{Result, SiftError},
};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Classify `location`: `http(s)://` is a URL, `file://` and anything
    /// else is a local path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Retrieve and parse the document.
    pub fn fetch(&self) -> Result<Document> {
        let doc = match self {
            Self::Url(url) => fetch_url(url)?,
            Self::File(path) => read_file(path)?,
        };
        info!("loaded document from {self}");
        Ok(doc)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Shorthand for `Source::parse(location).fetch()`.
pub fn fetch_document(location: &str) -> Result<Document> {
    Source::parse(location).fetch()
}

fn fetch_url(url: &str) -> Result<Document> {
    let wrap = |source| SiftError::Fetch {
        location: url.to_string(),
        source,
    };
    debug!("GET {url}");
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(wrap)?;
    let body = response.bytes().map_err(wrap)?;
    debug!("received {} byte(s)", body.len());
    Document::from_reader(body.as_ref(), url)
}

fn read_file(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|source| SiftError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Document::from_reader(BufReader::new(file), &path.display().to_string())
}
