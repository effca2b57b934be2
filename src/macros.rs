//! Logging macros with `println!`-style formatting.
//!
//! Each macro takes anything implementing [`Lager`](crate::Lager) followed by
//! a format string and its arguments. The arguments are captured with
//! `format_args!`, so nothing is formatted when the level is disabled, and
//! the caller location recorded in the `file` field is the macro call site.
//!
//! # Examples
//!
//! ```
//! use lager::prelude::*;
//! use lager::info;
//!
//! let logger = ContextLogger::builder()
//!     .with_levels(Levels::all())
//!     .with_drinker(std::sync::Arc::new(LineDrinker::new(std::io::sink())))
//!     .build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use lager::prelude::*;
/// # let logger = BasicLogger::new(BasicConfig::default().with_drinker(std::sync::Arc::new(LineDrinker::new(std::io::sink()))));
/// use lager::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Lager as _;
        $logger.log($level, ::std::format_args!($($arg)+))
    }};
}

/// Log a trace-level message.
///
/// ```
/// # use lager::prelude::*;
/// # let logger = BasicLogger::new(BasicConfig::default().with_drinker(std::sync::Arc::new(LineDrinker::new(std::io::sink()))));
/// lager::trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use lager::prelude::*;
/// # let logger = BasicLogger::new(BasicConfig::default().with_drinker(std::sync::Arc::new(LineDrinker::new(std::io::sink()))));
/// lager::warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}
