//! Level filtering shared by every logger variant
//!
//! A [`Renderer`] knows how to turn one message into output. A
//! [`Dispatcher`] wraps it with a [`Levels`] set and exposes the five
//! level-named methods of [`Lager`], so every logger variant gets the same
//! filtering without repeating it.

use super::level::{Level, Levels};
use std::fmt;

/// Anything that can render a message at a given severity.
///
/// Called only after the level check passed.
pub trait Renderer: Send + Sync {
    #[track_caller]
    fn render(&self, level: Level, args: fmt::Arguments<'_>);
}

/// The logging interface: five level-named methods plus level control.
///
/// Messages are `format_args!` values; the crate's `trace!` .. `error!`
/// macros build them. Nothing is formatted for a disabled level.
pub trait Lager: Send + Sync {
    fn levels(&self) -> &Levels;

    /// Log at `level` if it is enabled
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Replace the enabled levels of the shared set, affecting every logger
    /// that shares it
    fn set_levels(&self, levels: &Levels) {
        self.levels().replace(levels);
    }

    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Filters by [`Levels`] in front of a [`Renderer`]
pub struct Dispatcher<R> {
    renderer: R,
    levels: Levels,
}

impl<R: Renderer> Dispatcher<R> {
    pub fn new(renderer: R, levels: Levels) -> Self {
        Self { renderer, levels }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: Renderer> Lager for Dispatcher<R> {
    fn levels(&self) -> &Levels {
        &self.levels
    }

    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.levels.contains(level) {
            return;
        }
        self.renderer.render(level, args);
    }
}
