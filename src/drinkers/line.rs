//! Line drinker: logfmt-style `key=value` records

use super::Drinker;
use crate::core::{FieldValue, Record, Result, LEVEL_KEY, MSG_KEY, TIME_KEY};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::Write;

/// Keys rendered first, in this order
const LEADING_KEYS: [&str; 3] = [TIME_KEY, LEVEL_KEY, MSG_KEY];

/// Writes each record as one line of space-separated `key=value` tokens
///
/// `time`, `level` and `msg` lead in that order; the remaining fields
/// follow sorted by key. A value made only of ASCII alphanumerics, `-` and
/// `.` is written bare, anything else is quoted and escaped.
///
/// ```text
/// time=2025-01-08T10:30:45Z level=Error msg=boom code=7 user="jane doe"
/// ```
pub struct LineDrinker<W> {
    output: Mutex<W>,
}

impl<W: Write + Send> LineDrinker<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }

    /// Render `record` without writing it
    pub fn format(mut record: Record) -> String {
        let mut line = String::new();

        for key in LEADING_KEYS {
            if let Some(value) = record.remove(key) {
                append_key_value(&mut line, key, &value);
            }
        }
        for (key, value) in &record {
            append_key_value(&mut line, key, value);
        }

        line.push('\n');
        line
    }
}

impl<W: Write + Send> Drinker for LineDrinker<W> {
    fn drink(&self, record: Record) -> Result<()> {
        let line = Self::format(record);

        let mut output = self.output.lock();
        output.write_all(line.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "line"
    }
}

fn is_bare(text: &str) -> bool {
    text.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '.')
}

fn append_key_value(line: &mut String, key: &str, value: &FieldValue) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(key);
    line.push('=');

    // Writing into a String cannot fail
    let _ = match value {
        FieldValue::String(text) | FieldValue::Error(text) if is_bare(text) => {
            write!(line, "{}", text)
        }
        FieldValue::String(text) | FieldValue::Error(text) => write!(line, "{:?}", text),
        other => write!(line, "{}", other),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, FieldValue)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_reserved_keys_lead() -> Result<()> {
        let drinker = LineDrinker::new(Vec::new());

        drinker.drink(record(&[
            ("code", "7".into()),
            ("msg", "boom".into()),
            ("level", "ERROR".into()),
            ("time", "T".into()),
        ]))?;

        let output = String::from_utf8(drinker.into_inner()).expect("utf8");
        assert_eq!(output, "time=T level=ERROR msg=boom code=7\n");
        Ok(())
    }

    #[test]
    fn test_quoting() {
        let line = LineDrinker::<Vec<u8>>::format(record(&[
            ("bare", "v1.2-rc3".into()),
            ("spaced", "hello world".into()),
            ("quoted", "say \"hi\"".into()),
            ("newline", "a\nb".into()),
            ("empty", "".into()),
        ]));

        assert_eq!(
            line,
            "bare=v1.2-rc3 empty= newline=\"a\\nb\" quoted=\"say \\\"hi\\\"\" spaced=\"hello world\"\n"
        );
    }

    #[test]
    fn test_error_values_follow_string_quoting() {
        let line = LineDrinker::<Vec<u8>>::format(record(&[
            ("error", FieldValue::Error("timeout".to_string())),
            ("cause", FieldValue::Error("connection reset".to_string())),
        ]));

        assert_eq!(line, "cause=\"connection reset\" error=timeout\n");
    }

    #[test]
    fn test_scalars_are_bare() {
        let line = LineDrinker::<Vec<u8>>::format(record(&[
            ("count", 42.into()),
            ("ratio", 0.5.into()),
            ("ok", true.into()),
        ]));

        assert_eq!(line, "count=42 ok=true ratio=0.5\n");
    }

    #[test]
    fn test_missing_reserved_keys_are_skipped() {
        let line = LineDrinker::<Vec<u8>>::format(record(&[("msg", "only".into())]));
        assert_eq!(line, "msg=only\n");

        let line = LineDrinker::<Vec<u8>>::format(Record::new());
        assert_eq!(line, "\n");
    }

    #[test]
    fn test_non_ascii_is_quoted() {
        let line = LineDrinker::<Vec<u8>>::format(record(&[("city", "Zürich".into())]));
        assert_eq!(line, "city=\"Zürich\"\n");
    }
}
