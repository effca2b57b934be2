//! Severities and the shared level set
//!
//! Filtering is set membership, not a threshold: a logger writes a level
//! only when that exact level is enabled in its [`Levels`].

use bitflags::bitflags;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A single severity. The discriminant is the severity's bit in a [`LevelMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    Error = 1,
    Warn = 1 << 2,
    Info = 1 << 3,
    Debug = 1 << 4,
    Trace = 1 << 5,
}

impl Level {
    /// Every severity, most severe first
    pub const ALL: [Level; 5] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Display name written into the `level` field of a record
    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warn => "Warn",
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
        }
    }

    /// Character used for this level in a level-spec string
    pub fn letter(&self) -> char {
        match self {
            Level::Error => 'E',
            Level::Warn => 'W',
            Level::Info => 'I',
            Level::Debug => 'D',
            Level::Trace => 'T',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'E' => Some(Level::Error),
            'W' => Some(Level::Warn),
            'I' => Some(Level::Info),
            'D' => Some(Level::Debug),
            'T' => Some(Level::Trace),
            _ => None,
        }
    }

    pub fn mask(self) -> LevelMask {
        LevelMask::from_bits_retain(self as u8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

bitflags! {
    /// A combination of severities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LevelMask: u8 {
        const ERROR = Level::Error as u8;
        const WARN  = Level::Warn as u8;
        const INFO  = Level::Info as u8;
        const DEBUG = Level::Debug as u8;
        const TRACE = Level::Trace as u8;
    }
}

impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        level.mask()
    }
}

/// The set of levels a logger writes to its drinker.
///
/// `Levels` is a handle: clones share one underlying set, which is how a
/// parent logger and every child derived from it see the same verbosity.
/// Use [`Levels::detach`] for an independent copy.
///
/// # Example
///
/// ```
/// use lager::{Level, Levels};
///
/// let levels: Levels = "EI".parse().unwrap();
/// assert!(levels.contains(Level::Error));
/// assert!(levels.contains(Level::Info));
/// assert!(!levels.contains(Level::Warn));
/// ```
#[derive(Debug, Clone)]
pub struct Levels {
    bits: Arc<RwLock<LevelMask>>,
}

impl Levels {
    /// A set with nothing enabled
    pub fn empty() -> Self {
        Self::from(LevelMask::empty())
    }

    /// A set with every level enabled
    pub fn all() -> Self {
        Self::from(LevelMask::all())
    }

    /// Parse a level-spec string: each of `E`, `W`, `I`, `D`, `T` enables
    /// its level, anything else is ignored.
    pub fn parse(spec: &str) -> Self {
        let levels = Self::empty();
        for level in spec.chars().filter_map(Level::from_letter) {
            levels.set(level);
        }
        levels
    }

    pub fn set(&self, levels: impl Into<LevelMask>) -> &Self {
        self.bits.write().insert(levels.into());
        self
    }

    pub fn unset(&self, levels: impl Into<LevelMask>) -> &Self {
        self.bits.write().remove(levels.into());
        self
    }

    pub fn set_all(&self) -> &Self {
        self.set(LevelMask::all())
    }

    /// Exact membership of `level`
    pub fn contains(&self, level: Level) -> bool {
        self.bits.read().contains(level.mask())
    }

    /// Overwrite this set with the levels of `other`.
    ///
    /// Every handle sharing this set observes the change.
    pub fn replace(&self, other: &Levels) {
        let mask = other.mask();
        *self.bits.write() = mask;
    }

    pub fn mask(&self) -> LevelMask {
        *self.bits.read()
    }

    /// An independent copy of the current set
    pub fn detach(&self) -> Levels {
        Self::from(self.mask())
    }

    /// Whether both handles refer to the same underlying set
    pub fn same_set(&self, other: &Levels) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

/// Error only
impl Default for Levels {
    fn default() -> Self {
        Self::from(Level::Error)
    }
}

impl From<LevelMask> for Levels {
    fn from(mask: LevelMask) -> Self {
        Self {
            bits: Arc::new(RwLock::new(mask)),
        }
    }
}

impl From<Level> for Levels {
    fn from(level: Level) -> Self {
        Self::from(level.mask())
    }
}

impl FromStr for Levels {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Levels::parse(s))
    }
}

/// Renders the level-spec string, e.g. `EWI`
impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = self.mask();
        for level in Level::ALL {
            if mask.contains(level.mask()) {
                write!(f, "{}", level.letter())?;
            }
        }
        Ok(())
    }
}
