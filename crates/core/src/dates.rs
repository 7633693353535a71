// crates/core/src/dates.rs
use chrono::{
    NaiveDate, NaiveDateTime, NaiveTime,
    format::{Item, Numeric, StrftimeItems},
};

use crate::error::{Result, SiftError};

/// Parse `text` with a strftime-style `format`.
///
/// Formats without any time field (`%Y-%m-%d`) resolve to midnight. A
/// format with time fields must pin the full time of day, so `%Y-%m-%d %H`
/// is rejected rather than truncated. Surrounding whitespace is ignored.
pub fn parse_timestamp(text: &str, format: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let parsed = if has_time_fields(format) {
        NaiveDateTime::parse_from_str(trimmed, format)
    } else {
        NaiveDate::parse_from_str(trimmed, format).map(|d| d.and_time(NaiveTime::MIN))
    };
    parsed.map_err(|source| SiftError::MalformedDate {
        input: text.to_string(),
        format: format.to_string(),
        source,
    })
}

/// Whether `format` reads any time-of-day or epoch field.
fn has_time_fields(format: &str) -> bool {
    StrftimeItems::new(format).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour
                    | Numeric::Hour12
                    | Numeric::Minute
                    | Numeric::Second
                    | Numeric::Nanosecond
                    | Numeric::Timestamp,
                _
            )
        )
    })
}

/// Half-open `[start, end)` interval of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str, format: &str) -> Result<Self> {
        Ok(Self::new(
            parse_timestamp(start, format)?,
            parse_timestamp(end, format)?,
        ))
    }

    #[inline]
    pub fn contains(&self, value: NaiveDateTime) -> bool {
        self.start <= value && value < self.end
    }
}
