//! # Lager
//!
//! A small structured-logging facade: one interface with five level-named
//! methods, pluggable record sinks ("drinkers") and loggers that carry
//! key/value context into every record.
//!
//! ## Features
//!
//! - **Level sets**: any combination of Error, Warn, Info, Debug and Trace,
//!   shared by a logger and all of its children
//! - **Context**: `set`/`unset` fields in place, derive children with `with`,
//!   `with_error` and `child`
//! - **Drinkers**: logfmt-style lines or newline-delimited JSON
//! - **Caller info**: the call site of every record, at the verbosity you pick
//!
//! ## Quick start
//!
//! ```
//! use lager::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = ContextLogger::builder()
//!     .with_levels(Levels::parse("EWI"))
//!     .with_drinker(Arc::new(LineDrinker::new(std::io::stdout())))
//!     .build();
//!
//! let request = logger.with([("request_id", "r-17")]);
//! lager::info!(request, "served {} bytes", 512);
//! lager::debug!(request, "not written, Debug is off");
//! ```

pub mod core;
pub mod drinkers;
#[cfg(feature = "global")]
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BasicConfig, BasicLogger, ContextConfig, ContextLogger, FieldValue, FileVerbosity, Lager,
        LagerError, LagerMetrics, Level, LevelMask, Levels, PlainConfig, PlainLogger, Record,
        Result, SinkErrorPolicy, TimestampFormat,
    };
    pub use crate::drinkers::{Drinker, DrinkerKind, JsonDrinker, LineDrinker};
}

pub use crate::core::{
    BasicConfig, BasicLogger, ContextConfig, ContextLogger, Dispatcher, ErrorCallback, FieldValue,
    FileVerbosity, Lager, LagerError, LagerMetrics, Level, LevelMask, Levels, PlainConfig,
    PlainLogger, Record, Renderer, Result, SinkErrorPolicy, TimestampFormat, ERROR_KEY, FILE_KEY,
    LEVEL_KEY, MSG_KEY, STACKTRACE_KEY, TIME_KEY,
};
pub use drinkers::{drinker_from_str, Drinker, DrinkerKind, JsonDrinker, LineDrinker, NewDrinkerFn};
