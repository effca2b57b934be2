//! Source location of log calls
//!
//! The call site reaches the resolver through `#[track_caller]`: every
//! public log method and each layer it forwards through carries the
//! attribute, so [`Location::caller`] inside [`FileVerbosity::caller`] is the
//! line that invoked the logger. Adding a forwarding layer without the
//! attribute makes the resolved location point into this crate instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::path::{Path, MAIN_SEPARATOR};
use std::str::FromStr;

/// How much of the caller's source location a record carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileVerbosity {
    /// No `file` field
    None,
    /// `context.rs:42`
    Short,
    /// Path relative to the package, e.g. `tests/context.rs:42`
    #[default]
    Package,
    /// Absolute path, e.g. `/home/me/lager/tests/context.rs:42`
    Full,
}

impl FileVerbosity {
    /// Location of the (tracked) caller in this verbosity
    #[track_caller]
    pub fn caller(&self) -> Option<String> {
        self.resolve(Location::caller())
    }

    /// Render `location` in this verbosity.
    ///
    /// Best effort: never fails, at worst falls back to the path the
    /// compiler recorded.
    pub fn resolve(&self, location: &Location<'_>) -> Option<String> {
        let file = location.file();
        let path = match self {
            FileVerbosity::None => return None,
            FileVerbosity::Short => short_path(file).to_string(),
            FileVerbosity::Package => package_path(file),
            FileVerbosity::Full => full_path(file),
        };
        Some(format!("{}:{}", path, location.line()))
    }
}

fn short_path(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

fn package_path(file: &str) -> String {
    let path = Path::new(file);
    if path.is_relative() {
        return file.to_string();
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            return relative.display().to_string();
        }
    }

    // Dependency sources live outside the working directory; keep the
    // crate directory that owns the last `src/` segment.
    let marker = format!("{sep}src{sep}", sep = MAIN_SEPARATOR);
    if let Some(src) = file.rfind(&marker) {
        let crate_dir = file[..src].rfind(MAIN_SEPARATOR).map_or(0, |i| i + 1);
        return file[crate_dir..].to_string();
    }

    file.to_string()
}

fn full_path(file: &str) -> String {
    let path = Path::new(file);
    if path.is_absolute() {
        return file.to_string();
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path).display().to_string(),
        Err(_) => file.to_string(),
    }
}

impl fmt::Display for FileVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileVerbosity::None => "none",
            FileVerbosity::Short => "short",
            FileVerbosity::Package => "package",
            FileVerbosity::Full => "full",
        };
        f.write_str(name)
    }
}

impl FromStr for FileVerbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(FileVerbosity::None),
            "short" => Ok(FileVerbosity::Short),
            "package" => Ok(FileVerbosity::Package),
            "full" => Ok(FileVerbosity::Full),
            _ => Err(format!("Invalid file verbosity: '{}'", s)),
        }
    }
}
