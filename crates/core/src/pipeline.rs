// crates/core/src/pipeline.rs
//! Fetch → date filter → text filter → sort → CSV.

use std::{fmt, path::PathBuf};

use log::info;
use serde::Serialize;

use crate::{
    config::{PipelineConfig, SortKind},
    document::{Document, FieldPath, RecordSelector},
    error::{Result, SiftError},
    fetch::Source,
    filter::{DateRangeFilter, TextFilter},
    output::CsvSink,
    projection::{Column, Projection},
    sort::{SortKey, SortSpec},
};

/// A validated pipeline, ready to run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    source: Source,
    output: PathBuf,
    selector: RecordSelector,
    date_filter: Option<DateRangeFilter>,
    text_filter: Option<TextFilter>,
    sort: Option<SortSpec>,
    projection: Projection,
    header: bool,
}

/// Record counts observed while running a pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub fetched: usize,
    pub after_date_filter: usize,
    pub after_text_filter: usize,
    pub rows_written: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} record(s) fetched, {} after date filter, {} after text filter, {} row(s) written",
            self.fetched, self.after_date_filter, self.after_text_filter, self.rows_written
        )
    }
}

impl Pipeline {
    /// Validate `config` and compile it into typed stages.
    ///
    /// Nothing is fetched here, so a broken config fails before any I/O.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let selector: RecordSelector = config.records.parse()?;

        let date_filter = config
            .date_filter
            .as_ref()
            .map(|d| {
                DateRangeFilter::new(
                    selector.clone(),
                    d.path.parse()?,
                    &d.start,
                    &d.end,
                    d.format.clone(),
                )
            })
            .transpose()?;

        let text_filter = config
            .text_filter
            .as_ref()
            .map(|t| {
                let path: FieldPath = t.path.parse()?;
                Ok::<_, SiftError>(TextFilter::new(selector.clone(), path, &t.contains))
            })
            .transpose()?;

        let sort = config
            .sort
            .as_ref()
            .map(|s| {
                let path: FieldPath = s.path.parse()?;
                let key = match (s.kind, &s.format) {
                    (SortKind::Text, _) => SortKey::Text(path),
                    (SortKind::Date, Some(format)) => SortKey::Date {
                        path,
                        format: format.clone(),
                    },
                    (SortKind::Date, None) => {
                        return Err(SiftError::Config {
                            reason: format!("date sort on '{}' needs a format", s.path),
                        });
                    }
                };
                Ok(SortSpec::new(key, s.order))
            })
            .transpose()?;

        let columns = config
            .columns
            .iter()
            .map(|c| Ok(Column::new(c.path.parse()?, c.aggregate)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: Source::parse(&config.source),
            output: config.output.clone(),
            selector,
            date_filter,
            text_filter,
            sort,
            projection: Projection::new(columns)?,
            header: config.header,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn output(&self) -> &std::path::Path {
        &self.output
    }

    pub fn selector(&self) -> &RecordSelector {
        &self.selector
    }

    /// Run every in-memory stage on `doc`. `rows_written` stays zero.
    pub fn apply(&self, doc: &mut Document) -> Result<RunSummary> {
        let mut summary = RunSummary {
            fetched: doc.record_count(&self.selector),
            ..RunSummary::default()
        };

        if let Some(filter) = &self.date_filter {
            filter.apply(doc)?;
        }
        summary.after_date_filter = doc.record_count(&self.selector);

        if let Some(filter) = &self.text_filter {
            filter.apply(doc)?;
        }
        summary.after_text_filter = doc.record_count(&self.selector);

        if let Some(spec) = &self.sort {
            spec.apply(doc, &self.selector)?;
        }
        Ok(summary)
    }

    /// Write the projected records of `doc` to the configured output file.
    pub fn write(&self, doc: &Document) -> Result<usize> {
        CsvSink::new(&self.projection)
            .with_header(self.header)
            .write_file(&self.output, doc, &self.selector)
    }

    /// Fetch, transform and write. The output file is only created when
    /// every stage succeeds.
    pub fn run(&self) -> Result<RunSummary> {
        let mut doc = self.source.fetch()?;
        let mut summary = self.apply(&mut doc)?;
        summary.rows_written = self.write(&doc)?;
        info!("{summary}");
        Ok(summary)
    }
}

/// Compile and run `config`.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    Pipeline::from_config(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnConfig, DateFilterConfig, PipelineConfigBuilder, SortConfig};
    use crate::sort::SortOrder;

    fn base() -> PipelineConfigBuilder {
        let mut builder = PipelineConfigBuilder::default();
        builder
            .source("feed.xml")
            .records("Fruit")
            .columns(vec![ColumnConfig::plain("Type")]);
        builder
    }

    #[test]
    fn default_config_compiles() {
        let pipeline = Pipeline::from_config(&PipelineConfig::default()).unwrap();
        assert!(matches!(pipeline.source(), Source::Url(_)));
        assert_eq!(pipeline.selector(), &RecordSelector::tag("Listing"));
    }

    #[test]
    fn bad_boundary_fails_before_fetch() {
        let config = base()
            .date_filter(DateFilterConfig {
                path: "Datetime".into(),
                start: "yesterday".into(),
                end: "2020".into(),
                format: "%Y".into(),
            })
            .build()
            .unwrap();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(SiftError::MalformedDate { .. })
        ));
    }

    #[test]
    fn date_sort_without_format_is_a_config_error() {
        let config = base()
            .sort(SortConfig {
                path: "Datetime".into(),
                kind: SortKind::Date,
                format: None,
                order: SortOrder::Asc,
            })
            .build()
            .unwrap();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(SiftError::Config { .. })
        ));
    }

    #[test]
    fn bad_paths_are_invalid_arguments() {
        let config = base()
            .columns(vec![ColumnConfig::plain("A//B")])
            .build()
            .unwrap();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(SiftError::InvalidArgument { .. })
        ));

        let config = base().records("").build().unwrap();
        assert!(Pipeline::from_config(&config).is_err());

        let config = base().columns(Vec::<ColumnConfig>::new()).build().unwrap();
        assert!(Pipeline::from_config(&config).is_err());
    }

    #[test]
    fn apply_counts_each_stage() {
        let config = base()
            .text_filter(crate::config::TextFilterConfig {
                path: "Type".into(),
                contains: "an".into(),
            })
            .build()
            .unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        let mut doc = Document::parse_str(
            "<Fruits><Fruit><Type>Banana</Type></Fruit><Fruit><Type>Kiwi</Type></Fruit>\
             <Fruit><Type>Mango</Type></Fruit></Fruits>",
        )
        .unwrap();

        let summary = pipeline.apply(&mut doc).unwrap();
        assert_eq!(summary.fetched, 3);
        assert_eq!(summary.after_date_filter, 3);
        assert_eq!(summary.after_text_filter, 2);
        assert_eq!(summary.rows_written, 0);
    }
}
