//! Timestamp layouts for the `time` field
//!
//! A logger picks one layout at construction and hands it to every child,
//! so all records of one logger tree carry the same textual format.

use super::error::{LagerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Textual layout of the `time` field, always in UTC
///
/// # Examples
///
/// ```
/// use lager::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Rfc3339.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with whole seconds: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2025-01-08T10:30:45.123456Z`
    Rfc3339Micros,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `%Y/%m/%d %H:%M:%S`
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Millis => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339Micros => datetime.to_rfc3339_opts(SecondsFormat::Micros, true),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut stamp = String::new();
                match write!(stamp, "{}", datetime.format(format_str)) {
                    Ok(()) => stamp,
                    // Invalid layout; validate() reports it at configuration time
                    Err(_) => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
                }
            }
        }
    }

    /// A custom strftime layout, rejected if chrono cannot render it
    pub fn custom(layout: impl Into<String>) -> Result<Self> {
        let format = TimestampFormat::Custom(layout.into());
        format.validate()?;
        Ok(format)
    }

    /// Check that a custom layout only holds known specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LagerError::config(
                    "timestamp_format",
                    format!("invalid strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }

    /// Format the current instant
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
