//! Plain logger: `timestamp message` lines without records

use super::config::SinkErrorPolicy;
use super::dispatcher::{Dispatcher, Lager, Renderer};
use super::error::{LagerError, Result};
use super::level::{Level, Levels};
use super::metrics::LagerMetrics;
use super::timestamp::TimestampFormat;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// Layout of the leading timestamp, `2025/01/08 10:30:45`
pub const PLAIN_TIMESTAMP: &str = "%Y/%m/%d %H:%M:%S";

/// Configuration of a [`PlainLogger`]
pub struct PlainConfig {
    pub levels: Levels,
    pub output: Box<dyn Write + Send>,
    pub timestamp_format: TimestampFormat,
    pub on_error: SinkErrorPolicy,
}

/// Error only, written to stdout
impl Default for PlainConfig {
    fn default() -> Self {
        Self {
            levels: Levels::default(),
            output: Box::new(std::io::stdout()),
            timestamp_format: TimestampFormat::Custom(PLAIN_TIMESTAMP.to_string()),
            on_error: SinkErrorPolicy::default(),
        }
    }
}

impl PlainConfig {
    #[must_use = "builder methods return a new value"]
    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Box::new(output);
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

    pub fn build(self) -> PlainLogger {
        PlainLogger::new(self)
    }

    /// Build after rejecting an invalid timestamp layout
    pub fn try_build(self) -> Result<PlainLogger> {
        self.timestamp_format.validate()?;
        Ok(PlainLogger::new(self))
    }
}

pub struct PlainRenderer {
    output: Mutex<Box<dyn Write + Send>>,
    timestamp_format: TimestampFormat,
    on_error: SinkErrorPolicy,
    metrics: LagerMetrics,
}

impl PlainRenderer {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut output = self.output.lock();
        output.write_all(line.as_bytes())?;
        output.flush()
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, _level: Level, args: fmt::Arguments<'_>) {
        let mut line = self.timestamp_format.now();
        line.push(' ');
        line.push_str(&fmt::format(args));
        if !line.ends_with('\n') {
            line.push('\n');
        }

        match self.write_line(&line) {
            Ok(()) => self.metrics.record_written(),
            Err(err) => {
                self.metrics.record_dropped();
                self.on_error.report("plain", &LagerError::Io(err));
            }
        }
    }
}

/// A logger writing unstructured lines, for programs that want the classic
/// `date time message` look
///
/// ```
/// use lager::prelude::*;
///
/// let logger = PlainConfig::default()
///     .with_output(std::io::sink())
///     .with_levels(Levels::all())
///     .build();
/// lager::debug!(logger, "cache warm");
/// ```
pub struct PlainLogger {
    inner: Dispatcher<PlainRenderer>,
}

impl PlainLogger {
    pub fn new(config: PlainConfig) -> Self {
        let renderer = PlainRenderer {
            output: Mutex::new(config.output),
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

impl Default for PlainLogger {
    fn default() -> Self {
        Self::new(PlainConfig::default())
    }
}

impl Lager for PlainLogger {
    fn levels(&self) -> &Levels {
        self.inner.levels()
    }

    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.inner.log(level, args);
    }
}

impl fmt::Debug for PlainLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainLogger")
            .field("levels", &self.levels().to_string())
            .finish()
    }
}
