//! Core logger types and traits

pub mod basic;
pub mod caller;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod field_value;
pub mod level;
pub mod metrics;
pub mod plain;
pub mod timestamp;

pub use basic::{BasicConfig, BasicLogger};
pub use caller::FileVerbosity;
pub use config::{
    ContextConfig, ErrorCallback, SinkErrorPolicy, ENV_DRINKER, ENV_FILE, ENV_LEVELS,
    ENV_STACKTRACES,
};
pub use context::ContextLogger;
pub use dispatcher::{Dispatcher, Lager, Renderer};
pub use error::{LagerError, Result};
pub use field_value::{
    FieldValue, Record, ERROR_KEY, FILE_KEY, LEVEL_KEY, MSG_KEY, STACKTRACE_KEY, TIME_KEY,
};
pub use level::{Level, LevelMask, Levels};
pub use metrics::LagerMetrics;
pub use plain::{PlainConfig, PlainLogger, PLAIN_TIMESTAMP};
pub use timestamp::TimestampFormat;
