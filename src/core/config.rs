//! Configuration for the context logger
//!
//! [`ContextConfig`] doubles as the builder of [`ContextLogger`]: start
//! from `ContextConfig::default()` (or [`ContextLogger::builder`]), chain the
//! `with_*` setters and call [`ContextConfig::build`].

use super::caller::FileVerbosity;
use super::context::ContextLogger;
use super::error::{LagerError, Result};
use super::field_value::{FieldValue, Record};
use super::level::Levels;
use super::metrics::LagerMetrics;
use super::timestamp::TimestampFormat;
use crate::drinkers::{Drinker, DrinkerKind, JsonDrinker};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Level-spec string, e.g. `EWI`
pub const ENV_LEVELS: &str = "LAGER_LEVELS";
/// Drinker selector, `JSON` or `LOG`
pub const ENV_DRINKER: &str = "LAGER_DRINKER";
/// File verbosity: `none`, `short`, `package` or `full`
pub const ENV_FILE: &str = "LAGER_FILE";
/// Whether Error records carry a stacktrace
pub const ENV_STACKTRACES: &str = "LAGER_STACKTRACES";

/// Callback receiving drinker failures
pub type ErrorCallback = Arc<dyn Fn(&LagerError) + Send + Sync>;

/// What happens when a drinker fails under one of the five log methods.
///
/// The log methods return nothing, so a failure is counted in the logger's
/// [`LagerMetrics`] and then handed to this policy. It is never retried.
#[derive(Clone, Default)]
pub enum SinkErrorPolicy {
    /// Print one diagnostic line to stderr
    #[default]
    Stderr,
    /// Only count the failure
    Ignore,
    /// Hand the failure to a callback
    Callback(ErrorCallback),
}

impl SinkErrorPolicy {
    /// Drink `record`, counting and reporting any failure
    pub(crate) fn drink(&self, drinker: &dyn Drinker, record: Record, metrics: &LagerMetrics) {
        match drinker.drink(record) {
            Ok(()) => metrics.record_written(),
            Err(err) => {
                metrics.record_dropped();
                self.report(drinker.name(), &err);
            }
        }
    }

    pub(crate) fn report(&self, drinker: &str, err: &LagerError) {
        match self {
            SinkErrorPolicy::Stderr => {
                eprintln!("[LAGER ERROR] drinker '{}' failed: {}", drinker, err);
            }
            SinkErrorPolicy::Ignore => {}
            SinkErrorPolicy::Callback(callback) => callback(err),
        }
    }
}

impl fmt::Debug for SinkErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkErrorPolicy::Stderr => f.write_str("Stderr"),
            SinkErrorPolicy::Ignore => f.write_str("Ignore"),
            SinkErrorPolicy::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Configuration of a [`ContextLogger`]
///
/// # Example
///
/// ```
/// use lager::prelude::*;
/// use std::sync::Arc;
///
/// let logger = ContextLogger::builder()
///     .with_levels(Levels::parse("EWI"))
///     .with_drinker(Arc::new(LineDrinker::new(std::io::stderr())))
///     .with_field("service", "billing")
///     .with_file_verbosity(FileVerbosity::Short)
///     .build();
///
/// assert_eq!(logger.get("service").as_ref().and_then(FieldValue::as_str), Some("billing"));
/// ```
#[derive(Clone)]
pub struct ContextConfig {
    /// Enabled levels; the logger and its children share this set
    pub levels: Levels,
    pub drinker: Arc<dyn Drinker>,
    /// Initial context fields
    pub fields: HashMap<String, FieldValue>,
    /// Attach a stacktrace to Error records
    pub stacktraces: bool,
    pub file_verbosity: FileVerbosity,
    pub timestamp_format: TimestampFormat,
    pub on_error: SinkErrorPolicy,
}

/// Error only, JSON on stdout, package-relative file names, no stacktraces
impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            levels: Levels::default(),
            drinker: Arc::new(JsonDrinker::new(std::io::stdout())),
            fields: HashMap::new(),
            stacktraces: false,
            file_verbosity: FileVerbosity::default(),
            timestamp_format: TimestampFormat::default(),
            on_error: SinkErrorPolicy::default(),
        }
    }
}

impl ContextConfig {
    /// Defaults overridden by the `LAGER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`ContextConfig::from_env`] with a custom variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(spec) = lookup(ENV_LEVELS) {
            config.levels = Levels::parse(&spec);
        }

        if let Some(selector) = lookup(ENV_DRINKER) {
            config.drinker = selector
                .parse::<DrinkerKind>()?
                .build(Box::new(std::io::stdout()));
        }

        if let Some(verbosity) = lookup(ENV_FILE) {
            config.file_verbosity = verbosity
                .parse()
                .map_err(|msg: String| LagerError::config(ENV_FILE, msg))?;
        }

        if let Some(flag) = lookup(ENV_STACKTRACES) {
            config.stacktraces = parse_flag(&flag).ok_or_else(|| {
                LagerError::config(ENV_STACKTRACES, format!("expected a boolean, got '{}'", flag))
            })?;
        }

        Ok(config)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_drinker(mut self, drinker: Arc<dyn Drinker>) -> Self {
        self.drinker = drinker;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_stacktraces(mut self, stacktraces: bool) -> Self {
        self.stacktraces = stacktraces;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_verbosity(mut self, file_verbosity: FileVerbosity) -> Self {
        self.file_verbosity = file_verbosity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_error_policy(mut self, policy: SinkErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Report drinker failures to `callback` instead of stderr
    #[must_use = "builder methods return a new value"]
    pub fn on_error(self, callback: ErrorCallback) -> Self {
        self.with_error_policy(SinkErrorPolicy::Callback(callback))
    }

    /// Reject settings that could only fail later, at log time
    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate()
    }

    /// Build without checking the configuration; an invalid timestamp
    /// layout then falls back to RFC 3339
    pub fn build(self) -> ContextLogger {
        ContextLogger::new(self)
    }

    /// Validate, then build
    pub fn try_build(self) -> Result<ContextLogger> {
        self.validate()?;
        Ok(ContextLogger::new(self))
    }
}

impl fmt::Debug for ContextConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextConfig")
            .field("levels", &self.levels.to_string())
            .field("drinker", &self.drinker.name())
            .field("fields", &self.fields)
            .field("stacktraces", &self.stacktraces)
            .field("file_verbosity", &self.file_verbosity)
            .field("timestamp_format", &self.timestamp_format)
            .field("on_error", &self.on_error)
            .finish()
    }
}

fn parse_flag(flag: &str) -> Option<bool> {
    match flag.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
