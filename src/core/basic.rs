//! Basic logger: time, level and message only

use super::config::SinkErrorPolicy;
use super::dispatcher::{Dispatcher, Lager, Renderer};
use super::error::Result;
use super::field_value::{Record, LEVEL_KEY, MSG_KEY, TIME_KEY};
use super::level::{Level, Levels};
use super::metrics::LagerMetrics;
use super::timestamp::TimestampFormat;
use crate::drinkers::{Drinker, LineDrinker};
use std::fmt;
use std::sync::Arc;

/// Configuration of a [`BasicLogger`]
#[derive(Clone)]
pub struct BasicConfig {
    pub levels: Levels,
    pub drinker: Arc<dyn Drinker>,
    pub timestamp_format: TimestampFormat,
    pub on_error: SinkErrorPolicy,
}

/// Error only, line records on stdout
impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            levels: Levels::default(),
            drinker: Arc::new(LineDrinker::new(std::io::stdout())),
            timestamp_format: TimestampFormat::default(),
            on_error: SinkErrorPolicy::default(),
        }
    }
}

impl BasicConfig {
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
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_error_policy(mut self, policy: SinkErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn build(self) -> BasicLogger {
        BasicLogger::new(self)
    }

    /// Build after rejecting an invalid timestamp layout
    pub fn try_build(self) -> Result<BasicLogger> {
        self.timestamp_format.validate()?;
        Ok(BasicLogger::new(self))
    }
}

pub struct BasicRenderer {
    drinker: Arc<dyn Drinker>,
    timestamp_format: TimestampFormat,
    on_error: SinkErrorPolicy,
    metrics: LagerMetrics,
}

impl Renderer for BasicRenderer {
    fn render(&self, level: Level, args: fmt::Arguments<'_>) {
        let mut record = Record::new();
        record.insert(TIME_KEY.to_string(), self.timestamp_format.now().into());
        record.insert(LEVEL_KEY.to_string(), level.name().into());
        record.insert(MSG_KEY.to_string(), fmt::format(args).into());

        self.on_error.drink(&*self.drinker, record, &self.metrics);
    }
}

/// A logger without context fields or caller information
///
/// ```
/// use lager::prelude::*;
///
/// let logger = BasicLogger::new(BasicConfig::default().with_levels(Levels::parse("EW")));
/// lager::warn!(logger, "queue at {} items", 900);
/// ```
pub struct BasicLogger {
    inner: Dispatcher<BasicRenderer>,
}

impl BasicLogger {
    pub fn new(config: BasicConfig) -> Self {
        let renderer = BasicRenderer {
            drinker: config.drinker,
            timestamp_format: config.timestamp_format,
            on_error: config.on_error,
            metrics: LagerMetrics::new(),
        };

        Self {
            inner: Dispatcher::new(renderer, config.levels),
        }
    }

    pub fn metrics(&self) -> &LagerMetrics {
        &self.inner.renderer().metrics
    }
}

impl Default for BasicLogger {
    fn default() -> Self {
        Self::new(BasicConfig::default())
    }
}

impl Lager for BasicLogger {
    fn levels(&self) -> &Levels {
        self.inner.levels()
    }

    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.inner.log(level, args);
    }
}

impl fmt::Debug for BasicLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicLogger")
            .field("levels", &self.levels().to_string())
            .field("drinker", &self.inner.renderer().drinker.name())
            .finish()
    }
}
