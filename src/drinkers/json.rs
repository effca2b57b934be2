//! JSON drinker for newline-delimited JSON output

use super::Drinker;
use crate::core::{LagerError, Record, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. Every
/// [`FieldValue`](crate::FieldValue) maps onto a JSON scalar except
/// non-finite floats, which are rejected instead of being written as `null`.
pub struct JsonDrinker<W> {
    output: Mutex<W>,
}

impl<W: Write + Send> JsonDrinker<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }

    /// Serialize `record` into one newline-terminated JSON object
    pub fn format(record: &Record) -> Result<Vec<u8>> {
        let mut json_obj = serde_json::Map::with_capacity(record.len());
        for (key, value) in record {
            let json_value = value.to_json_value().ok_or_else(|| {
                LagerError::formatter("JSON", format!("key '{}' holds non-finite {}", key, value))
            })?;
            json_obj.insert(key.clone(), json_value);
        }

        let mut buf = serde_json::to_vec(&json_obj)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl<W: Write + Send> Drinker for JsonDrinker<W> {
    fn drink(&self, record: Record) -> Result<()> {
        let buf = Self::format(&record)?;

        let mut output = self.output.lock();
        output.write_all(&buf)?;
        output.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
