//! Process-wide default logger
//!
//! A convenience for small programs and scripts. Libraries and services
//! should build a [`ContextLogger`] at startup and pass it down instead.
//!
//! The default is built on first use from [`ContextConfig::default`]:
//! Error level only, JSON records on stdout.
//!
//! ```
//! use lager::global;
//! use lager::Levels;
//!
//! global::set_levels(&Levels::parse("EW"));
//! global::set("app", "cron");
//! global::warnf(format_args!("job {} slow", 4));
//! ```

use crate::core::{ContextConfig, ContextLogger, FieldValue, Lager, Levels};
use crate::drinkers::Drinker;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static DEFAULT_LAGER: Lazy<RwLock<ContextLogger>> =
    Lazy::new(|| RwLock::new(ContextConfig::default().build()));

/// A handle to the current default logger
///
/// The lock is held only for the clone, so drinkers and error callbacks
/// may log through this module and `set_drinker` never waits on a write.
pub fn logger() -> ContextLogger {
    DEFAULT_LAGER.read().clone()
}

/// Replace the enabled levels of the default logger
pub fn set_levels(levels: &Levels) {
    logger().set_levels(levels);
}

/// Swap in a default logger writing to `drinker`
///
/// Levels, fields and policies carry over. Handles obtained earlier from
/// [`logger`] keep writing to the previous drinker.
pub fn set_drinker(drinker: Arc<dyn Drinker>) {
    let mut current = DEFAULT_LAGER.write();
    let replacement = current.with_drinker(drinker);
    *current = replacement;
}

/// Set a field on the default logger
pub fn set(key: impl Into<String>, value: impl Into<FieldValue>) {
    logger().set(key, value);
}

/// Remove a field from the default logger
pub fn unset(key: &str) {
    logger().unset(key);
}

/// A child of the default logger
pub fn child() -> ContextLogger {
    logger().child()
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    logger().tracef(args);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    logger().debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    logger().warnf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}
