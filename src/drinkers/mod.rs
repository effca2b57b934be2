//! Drinkers: sinks that serialize one record per call

pub mod json;
pub mod line;

pub use json::JsonDrinker;
pub use line::LineDrinker;

use crate::core::{LagerError, Record, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

/// A destination for records
///
/// `drink` writes exactly one terminated record to the underlying byte
/// sink, in call order, without buffering across calls. Errors from the
/// sink are returned, never panicked on.
pub trait Drinker: Send + Sync {
    fn drink(&self, record: Record) -> Result<()>;
    fn name(&self) -> &str;
}

/// Constructor of a drinker over an arbitrary byte sink
pub type NewDrinkerFn = fn(Box<dyn Write + Send>) -> Arc<dyn Drinker>;

/// The built-in drinkers, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkerKind {
    Json,
    Line,
}

impl DrinkerKind {
    pub fn factory(self) -> NewDrinkerFn {
        match self {
            DrinkerKind::Json => new_json_drinker,
            DrinkerKind::Line => new_line_drinker,
        }
    }

    pub fn build(self, output: Box<dyn Write + Send>) -> Arc<dyn Drinker> {
        (self.factory())(output)
    }
}

impl fmt::Display for DrinkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrinkerKind::Json => f.write_str("JSON"),
            DrinkerKind::Line => f.write_str("LOG"),
        }
    }
}

/// Accepts `JSON` and `LOG` (or `LINE`), ignoring case
impl FromStr for DrinkerKind {
    type Err = LagerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "JSON" => Ok(DrinkerKind::Json),
            "LOG" | "LINE" => Ok(DrinkerKind::Line),
            _ => Err(LagerError::no_drinker(s)),
        }
    }
}

/// Pick a drinker constructor by name, e.g. from the environment.
///
/// # Example
///
/// ```
/// use lager::drinkers::drinker_from_str;
///
/// let new_drinker = drinker_from_str("JSON").unwrap();
/// let drinker = new_drinker(Box::new(std::io::sink()));
/// assert_eq!(drinker.name(), "json");
///
/// assert!(drinker_from_str("XML").is_err());
/// ```
pub fn drinker_from_str(selector: &str) -> Result<NewDrinkerFn> {
    selector.parse::<DrinkerKind>().map(DrinkerKind::factory)
}

fn new_json_drinker(output: Box<dyn Write + Send>) -> Arc<dyn Drinker> {
    Arc::new(JsonDrinker::new(output))
}

fn new_line_drinker(output: Box<dyn Write + Send>) -> Arc<dyn Drinker> {
    Arc::new(LineDrinker::new(output))
}
