//! Context logger: level filtering plus inherited key/value fields
//!
//! A [`ContextLogger`] carries a bag of fields that it copies into every
//! record. `set`/`unset` change the bag in place; `with`, `with_error` and
//! `child` derive a new logger from a snapshot of it. Derived loggers
//! share the level set, drinker, policies and metrics of their parent but
//! never its later field changes.

use super::caller::FileVerbosity;
use super::config::{ContextConfig, SinkErrorPolicy};
use super::dispatcher::{Dispatcher, Lager, Renderer};
use super::field_value::{
    FieldValue, Record, ERROR_KEY, FILE_KEY, LEVEL_KEY, MSG_KEY, STACKTRACE_KEY, TIME_KEY,
};
use super::level::{Level, Levels};
use super::metrics::LagerMetrics;
use super::timestamp::TimestampFormat;
use crate::drinkers::Drinker;
use parking_lot::RwLock;
use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds records from the context fields and hands them to the drinker
pub struct ContextRenderer {
    drinker: Arc<dyn Drinker>,
    fields: RwLock<HashMap<String, FieldValue>>,
    stacktraces: bool,
    file_verbosity: FileVerbosity,
    timestamp_format: TimestampFormat,
    on_error: SinkErrorPolicy,
    metrics: Arc<LagerMetrics>,
}

impl ContextRenderer {
    #[track_caller]
    fn record(&self, level: Level, args: fmt::Arguments<'_>) -> Record {
        let mut record: Record = self
            .fields
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if level == Level::Error && self.stacktraces {
            let trace = Backtrace::force_capture().to_string();
            record.insert(STACKTRACE_KEY.to_string(), FieldValue::String(trace));
        }

        // `file` is reserved for the call site, even when it is not resolved
        match self.file_verbosity.caller() {
            Some(file) => record.insert(FILE_KEY.to_string(), FieldValue::String(file)),
            None => record.remove(FILE_KEY),
        };

        record.insert(TIME_KEY.to_string(), self.timestamp_format.now().into());
        record.insert(MSG_KEY.to_string(), fmt::format(args).into());
        record.insert(LEVEL_KEY.to_string(), level.name().into());
        record
    }
}

impl Renderer for ContextRenderer {
    #[track_caller]
    fn render(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = self.record(level, args);
        self.on_error.drink(&*self.drinker, record, &self.metrics);
    }
}

/// A logger that adds context to records with key/value pairs
///
/// Cloning a `ContextLogger` yields another handle to the *same* logger;
/// use [`ContextLogger::child`] for an independent one.
///
/// # Example
///
/// ```
/// use lager::prelude::*;
/// use std::sync::Arc;
///
/// let logger = ContextLogger::builder()
///     .with_levels(Levels::parse("EI"))
///     .with_drinker(Arc::new(JsonDrinker::new(std::io::sink())))
///     .build();
///
/// logger.set("service", "billing");
/// let request = logger.with([("request_id", "r-17")]);
///
/// lager::info!(request, "charged {} cents", 250);
/// assert!(request.get("request_id").is_some());
/// assert!(logger.get("request_id").is_none());
/// ```
#[derive(Clone)]
pub struct ContextLogger {
    inner: Arc<Dispatcher<ContextRenderer>>,
}

impl ContextLogger {
    pub fn new(config: ContextConfig) -> Self {
        let renderer = ContextRenderer {
            drinker: config.drinker,
            fields: RwLock::new(config.fields),
            stacktraces: config.stacktraces,
            file_verbosity: config.file_verbosity,
            timestamp_format: config.timestamp_format,
            on_error: config.on_error,
            metrics: Arc::new(LagerMetrics::new()),
        };

        Self {
            inner: Arc::new(Dispatcher::new(renderer, config.levels)),
        }
    }

    /// Start from the default configuration
    #[must_use]
    pub fn builder() -> ContextConfig {
        ContextConfig::default()
    }

    fn renderer(&self) -> &ContextRenderer {
        self.inner.renderer()
    }

    /// A new logger sharing everything but the field bag, which is `fields`
    fn derive(&self, fields: HashMap<String, FieldValue>, drinker: Arc<dyn Drinker>) -> Self {
        let parent = self.renderer();
        let renderer = ContextRenderer {
            drinker,
            fields: RwLock::new(fields),
            stacktraces: parent.stacktraces,
            file_verbosity: parent.file_verbosity,
            timestamp_format: parent.timestamp_format.clone(),
            on_error: parent.on_error.clone(),
            metrics: Arc::clone(&parent.metrics),
        };

        Self {
            inner: Arc::new(Dispatcher::new(renderer, self.levels().clone())),
        }
    }

    /// Set `key` to `value` on this logger
    pub fn set(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> &Self {
        self.renderer().fields.write().insert(key.into(), value.into());
        self
    }

    /// Remove `key` from this logger, if present
    pub fn unset(&self, key: &str) -> &Self {
        self.renderer().fields.write().remove(key);
        self
    }

    /// A child with `fields` merged over a snapshot of this logger's fields.
    ///
    /// No fields means no new logger: the returned handle is this one.
    pub fn with<I, K, V>(&self, fields: I) -> ContextLogger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut fields = fields.into_iter().peekable();
        if fields.peek().is_none() {
            return self.clone();
        }

        let mut merged = self.fields();
        merged.extend(fields.map(|(k, v)| (k.into(), v.into())));
        self.derive(merged, Arc::clone(&self.renderer().drinker))
    }

    /// A child carrying `err`'s message under `error`; this logger when `err` is `None`
    pub fn with_error<E>(&self, err: Option<&E>) -> ContextLogger
    where
        E: std::error::Error + ?Sized,
    {
        match err {
            Some(err) => self.with([(ERROR_KEY, FieldValue::Error(err.to_string()))]),
            None => self.clone(),
        }
    }

    /// An independent logger with a copy of the current fields
    pub fn child(&self) -> ContextLogger {
        self.derive(self.fields(), Arc::clone(&self.renderer().drinker))
    }

    /// A child that writes to `drinker` instead
    pub fn with_drinker(&self, drinker: Arc<dyn Drinker>) -> ContextLogger {
        self.derive(self.fields(), drinker)
    }

    /// Snapshot of the current fields
    pub fn fields(&self) -> HashMap<String, FieldValue> {
        self.renderer().fields.read().clone()
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.renderer().fields.read().get(key).cloned()
    }

    pub fn drinker(&self) -> &Arc<dyn Drinker> {
        &self.renderer().drinker
    }

    pub fn file_verbosity(&self) -> FileVerbosity {
        self.renderer().file_verbosity
    }

    pub fn stacktraces(&self) -> bool {
        self.renderer().stacktraces
    }

    /// Write counters shared with every logger derived from the same root
    pub fn metrics(&self) -> &LagerMetrics {
        &self.renderer().metrics
    }

    /// Whether both handles are the same logger
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl Default for ContextLogger {
    fn default() -> Self {
        Self::new(ContextConfig::default())
    }
}

impl Lager for ContextLogger {
    fn levels(&self) -> &Levels {
        self.inner.levels()
    }

    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.inner.log(level, args);
    }
}

impl fmt::Debug for ContextLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextLogger")
            .field("levels", &self.levels().to_string())
            .field("drinker", &self.drinker().name())
            .field("fields", &self.fields())
            .finish()
    }
}
