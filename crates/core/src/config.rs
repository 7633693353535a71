// crates/core/src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SiftError},
    sort::SortOrder,
};

pub const LISTINGS_FEED_URL: &str =
    "http://syndication.enterprise.websiteidx.com/feeds/BoojCodeTest.xml";
pub const DEFAULT_OUTPUT: &str = "output.csv";
pub const LISTING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Declarative description of one pipeline run.
///
/// `Default` is the listings feed pipeline; config files and the builder
/// start from an empty pipeline instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// URL or local path of the XML document.
    pub source: String,
    #[builder(default = "default_output()")]
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Tag of the record elements below the root (`*` for all).
    pub records: String,
    #[builder(default)]
    #[serde(default)]
    pub date_filter: Option<DateFilterConfig>,
    #[builder(default)]
    #[serde(default)]
    pub text_filter: Option<TextFilterConfig>,
    #[builder(default)]
    #[serde(default)]
    pub sort: Option<SortConfig>,
    pub columns: Vec<ColumnConfig>,
    #[builder(default)]
    #[serde(default)]
    pub header: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateFilterConfig {
    pub path: String,
    pub start: String,
    pub end: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextFilterConfig {
    pub path: String,
    pub contains: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    #[default]
    Text,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    pub path: String,
    #[serde(default)]
    pub kind: SortKind,
    /// Required when `kind` is `date`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub path: String,
    #[serde(default)]
    pub aggregate: bool,
}

impl ColumnConfig {
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            aggregate: false,
        }
    }

    pub fn aggregate(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            aggregate: true,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: LISTINGS_FEED_URL.to_string(),
            output: default_output(),
            records: "./Listing".to_string(),
            date_filter: Some(DateFilterConfig {
                path: "./ListingDetails/DateListed".to_string(),
                start: "2016-01-01 00:00:00".to_string(),
                end: "2017-01-01 00:00:00".to_string(),
                format: LISTING_DATE_FORMAT.to_string(),
            }),
            text_filter: Some(TextFilterConfig {
                path: "./BasicDetails/Description".to_string(),
                contains: " and ".to_string(),
            }),
            sort: Some(SortConfig {
                path: "./ListingDetails/DateListed".to_string(),
                kind: SortKind::Date,
                format: Some(LISTING_DATE_FORMAT.to_string()),
                order: SortOrder::Asc,
            }),
            columns: vec![
                ColumnConfig::plain("./ListingDetails/MlsId"),
                ColumnConfig::plain("./ListingDetails/MlsName"),
                ColumnConfig::plain("./ListingDetails/DateListed"),
                ColumnConfig::plain("./Location/StreetAddress"),
                ColumnConfig::plain("./ListingDetails/Price"),
                ColumnConfig::plain("./BasicDetails/Bedrooms"),
                ColumnConfig::plain("./BasicDetails/FullBathrooms"),
                ColumnConfig::plain("./BasicDetails/HalfBathrooms"),
                ColumnConfig::plain("./BasicDetails/ThreeQuarterBathrooms"),
                ColumnConfig::aggregate("./RichDetails/Appliances"),
                ColumnConfig::aggregate("./RichDetails/Rooms"),
                ColumnConfig::plain("./BasicDetails/Description"),
            ],
            header: false,
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON pipeline description.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| SiftError::Config {
            reason: e.to_string(),
        })
    }

    /// Parse a YAML pipeline description.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| SiftError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a config file. `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiftError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            #[cfg(feature = "yaml")]
            return Self::from_yaml_str(&text);
            #[cfg(not(feature = "yaml"))]
            return Err(SiftError::Config {
                reason: format!(
                    "{}: YAML configs need the `yaml` feature",
                    path.display()
                ),
            });
        }
        Self::from_json_str(&text)
    }
}
