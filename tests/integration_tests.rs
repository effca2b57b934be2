//! Integration tests for the lager loggers
//!
//! These tests verify:
//! - Level filtering writes nothing for disabled levels
//! - Context fields and child isolation
//! - Stacktrace and caller fields
//! - Line and JSON output end to end
//! - Drinker failure handling

mod common;

use common::{BrokenPipe, SharedBuffer};
use lager::prelude::*;
use lager::{drinker_from_str, FILE_KEY, STACKTRACE_KEY};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn json_logger(levels: &str, out: &SharedBuffer) -> ContextLogger {
    ContextLogger::builder()
        .with_levels(Levels::parse(levels))
        .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
        .with_file_verbosity(FileVerbosity::None)
        .build()
}

fn verbose_logger(verbosity: FileVerbosity, out: &SharedBuffer) -> ContextLogger {
    ContextLogger::builder()
        .with_levels(Levels::all())
        .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
        .with_file_verbosity(verbosity)
        .build()
}

/// The `file` field of the only record in `out`
fn only_file(out: &SharedBuffer) -> String {
    let records = out.json_lines();
    assert_eq!(records.len(), 1);
    records[0][FILE_KEY].as_str().expect("file is a string").to_string()
}

fn split_location(file: &str) -> (&str, u32) {
    let (path, line) = file.rsplit_once(':').expect("path:line");
    (path, line.parse().expect("line number"))
}

#[test]
fn test_trace_hello_world() {
    let out = SharedBuffer::new();
    let logger = json_logger("T", &out);
    logger.set("hello", "world");

    logger.tracef(format_args!("this is a {}", "test"));

    let records = out.json_lines();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["msg"], "this is a test");
    assert_eq!(records[0]["hello"], "world");
    assert_eq!(records[0]["level"], "Trace");
}

#[test]
fn test_level_spec_ei() {
    let levels = Levels::parse("EI");
    assert!(levels.contains(Level::Error));
    assert!(levels.contains(Level::Info));
    assert!(!levels.contains(Level::Warn));
    assert!(!levels.contains(Level::Trace));
    assert!(!levels.contains(Level::Debug));
}

#[test]
fn test_disabled_levels_write_zero_bytes() {
    for enabled in Level::ALL {
        let out = SharedBuffer::new();
        let logger = json_logger(&enabled.letter().to_string(), &out);

        for level in Level::ALL.into_iter().filter(|l| *l != enabled) {
            logger.log(level, format_args!("suppressed {}", level));
        }
        assert!(out.is_empty(), "{} logger wrote a disabled level", enabled);

        logger.log(enabled, format_args!("kept {}", enabled));
        let records = out.json_lines();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["msg"], format!("kept {}", enabled));
    }
}

#[test]
fn test_all_levels_each_write_one_record() {
    let out = SharedBuffer::new();
    let logger = json_logger("EWIDT", &out);

    logger.tracef(format_args!("t"));
    logger.debugf(format_args!("d"));
    logger.infof(format_args!("i"));
    logger.warnf(format_args!("w"));
    logger.errorf(format_args!("e"));

    let levels: Vec<String> = out
        .json_lines()
        .iter()
        .map(|r| r["level"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(levels, vec!["Trace", "Debug", "Info", "Warn", "Error"]);
}

#[test]
fn test_child_set_is_isolated() {
    let out = SharedBuffer::new();
    let parent = json_logger("E", &out);
    parent.set("shared", "yes");

    let before = parent.child();
    let child = parent.child();
    child.set("mine", "child");
    let after = parent.child();

    for other in [&parent, &before, &after] {
        assert!(other.get("mine").is_none());
        assert_eq!(other.get("shared"), Some(FieldValue::from("yes")));
    }

    child.errorf(format_args!("from child"));
    parent.errorf(format_args!("from parent"));

    let records = out.json_lines();
    assert_eq!(records[0]["mine"], "child");
    assert!(!records[1].contains_key("mine"));
}

#[test]
fn test_parent_changes_do_not_reach_children() {
    let out = SharedBuffer::new();
    let parent = json_logger("E", &out);
    let child = parent.child();

    parent.set("late", "value");
    child.errorf(format_args!("child"));

    assert!(!out.json_lines()[0].contains_key("late"));
}

#[test]
fn test_level_change_reaches_whole_tree() {
    let out = SharedBuffer::new();
    let root = json_logger("E", &out);
    let child = root.child();
    let grandchild = child.with([("depth", "2")]);

    grandchild.debugf(format_args!("hidden"));
    assert!(out.is_empty());

    root.set_levels(&Levels::parse("D"));
    grandchild.debugf(format_args!("shown"));
    child.errorf(format_args!("now hidden"));

    let records = out.json_lines();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["depth"], "2");
}

#[test]
fn test_with_empty_returns_same_instance() {
    let out = SharedBuffer::new();
    let logger = json_logger("E", &out);

    let same = logger.with(HashMap::<String, String>::new());
    assert!(ContextLogger::ptr_eq(&logger, &same));

    let fields: Option<HashMap<String, String>> = None;
    let same = logger.with(fields.into_iter().flatten());
    assert!(ContextLogger::ptr_eq(&logger, &same));
}

#[test]
fn test_with_error() {
    let out = SharedBuffer::new();
    let logger = json_logger("E", &out);

    let same = logger.with_error::<std::io::Error>(None);
    assert!(ContextLogger::ptr_eq(&logger, &same));

    let err = "x".parse::<i32>().expect_err("not a number");
    let failed = logger.with_error(Some(&err));
    assert!(!ContextLogger::ptr_eq(&logger, &failed));

    failed.errorf(format_args!("parse failed"));
    let records = out.json_lines();
    assert_eq!(records[0]["error"], err.to_string());
}

#[test]
fn test_stacktrace_iff_error_and_enabled() {
    for stacktraces in [false, true] {
        let out = SharedBuffer::new();
        let logger = ContextLogger::builder()
            .with_levels(Levels::all())
            .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
            .with_stacktraces(stacktraces)
            .build();

        for level in Level::ALL {
            logger.log(level, format_args!("{}", level));
        }

        for record in out.json_lines() {
            let is_error = record["level"] == "Error";
            assert_eq!(
                record.contains_key(STACKTRACE_KEY),
                is_error && stacktraces,
                "level {} stacktraces {}",
                record["level"],
                stacktraces
            );
        }
    }
}

#[test]
fn test_no_file_key_without_verbosity() {
    let out = SharedBuffer::new();
    let logger = verbose_logger(FileVerbosity::None, &out);

    for level in Level::ALL {
        logger.log(level, format_args!("x"));
    }
    assert!(out.json_lines().iter().all(|r| !r.contains_key(FILE_KEY)));
}

#[test]
fn test_short_file_has_no_separators() {
    let out = SharedBuffer::new();
    let logger = verbose_logger(FileVerbosity::Short, &out);

    let line = line!() + 1;
    logger.infof(format_args!("short"));

    let file = only_file(&out);
    assert_eq!(file, format!("integration_tests.rs:{}", line));
    let (path, _) = split_location(&file);
    assert!(!path.contains('/') && !path.contains('\\'));
}

#[test]
fn test_full_path_is_longer_than_package_path() {
    let package_out = SharedBuffer::new();
    let full_out = SharedBuffer::new();
    let package = verbose_logger(FileVerbosity::Package, &package_out);
    let full = verbose_logger(FileVerbosity::Full, &full_out);

    // Same line so both resolve the same call site
    package.infof(format_args!("p")); full.infof(format_args!("f"));

    let package_file = only_file(&package_out);
    let full_file = only_file(&full_out);
    let (package_path, package_line) = split_location(&package_file);
    let (full_path, full_line) = split_location(&full_file);

    assert_eq!(package_line, full_line);
    assert!(package_path.ends_with("integration_tests.rs"));
    assert!(Path::new(full_path).is_absolute());
    assert!(full_path.ends_with(package_path));
    assert!(Path::new(full_path).components().count() > Path::new(package_path).components().count());
}

#[test]
fn test_every_entry_point_resolves_to_this_file() {
    let out = SharedBuffer::new();
    let logger = verbose_logger(FileVerbosity::Short, &out);
    let child = logger.with([("k", "v")]);
    let mut expected = Vec::new();

    expected.push(line!() + 1);
    logger.tracef(format_args!("tracef"));
    expected.push(line!() + 1);
    logger.debugf(format_args!("debugf"));
    expected.push(line!() + 1);
    logger.infof(format_args!("infof"));
    expected.push(line!() + 1);
    logger.warnf(format_args!("warnf"));
    expected.push(line!() + 1);
    logger.errorf(format_args!("errorf"));
    expected.push(line!() + 1);
    logger.log(Level::Info, format_args!("log"));
    expected.push(line!() + 1);
    child.infof(format_args!("child"));
    expected.push(line!() + 1);
    lager::trace!(logger, "trace!");
    expected.push(line!() + 1);
    lager::debug!(logger, "debug!");
    expected.push(line!() + 1);
    lager::info!(logger, "info! {}", 1);
    expected.push(line!() + 1);
    lager::warn!(child, "warn!");
    expected.push(line!() + 1);
    lager::error!(child, "error!");
    expected.push(line!() + 1);
    lager::log!(logger, Level::Debug, "log!");

    let files: Vec<String> = out
        .json_lines()
        .iter()
        .map(|r| r[FILE_KEY].as_str().unwrap_or_default().to_string())
        .collect();
    let wanted: Vec<String> = expected
        .iter()
        .map(|line| format!("integration_tests.rs:{}", line))
        .collect();
    assert_eq!(files, wanted);
}

#[test]
fn test_json_round_trip() {
    let out = SharedBuffer::new();
    let logger = ContextLogger::builder()
        .with_levels(Levels::all())
        .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
        .with_file_verbosity(FileVerbosity::None)
        .with_field("service", "billing")
        .with_field("attempt", 3)
        .with_field("ratio", 0.25)
        .with_field("retry", true)
        .build();

    logger.warnf(format_args!("charge {} retried", "c-9"));

    let records = out.json_lines();
    let record = &records[0];
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["attempt", "level", "msg", "ratio", "retry", "service", "time"]);

    assert_eq!(record["service"], "billing");
    assert_eq!(record["attempt"], 3);
    assert_eq!(record["ratio"], 0.25);
    assert_eq!(record["retry"], Value::Bool(true));
    assert_eq!(record["msg"], "charge c-9 retried");
    assert_eq!(record["level"], "Warn");
}

#[test]
fn test_line_output_end_to_end() {
    let out = SharedBuffer::new();
    let logger = ContextLogger::builder()
        .with_levels(Levels::parse("W"))
        .with_drinker(Arc::new(LineDrinker::new(out.clone())))
        .with_file_verbosity(FileVerbosity::None)
        .with_timestamp_format(TimestampFormat::Custom("T".to_string()))
        .with_field("user", "jane doe")
        .with_field("code", 7)
        .build();

    lager::warn!(logger, "slow");

    assert_eq!(out.contents(), "time=T level=Warn msg=slow code=7 user=\"jane doe\"\n");
}

#[test]
fn test_drinker_from_str() {
    let out = SharedBuffer::new();

    let new_drinker = drinker_from_str("LOG").expect("LOG is known");
    let drinker = new_drinker(Box::new(out.clone()));
    assert_eq!(drinker.name(), "line");

    let new_drinker = drinker_from_str("JSON").expect("JSON is known");
    assert_eq!(new_drinker(Box::new(out.clone())).name(), "json");

    let err = drinker_from_str("XML").err().expect("XML is unknown");
    assert!(matches!(err, LagerError::NoDrinker(ref s) if s == "XML"));
    assert_eq!(err.to_string(), "No Drinker: 'XML'");
}

#[test]
fn test_failing_drinker_reports_and_counts() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);

    let logger = ContextLogger::builder()
        .with_levels(Levels::all())
        .with_drinker(Arc::new(LineDrinker::new(BrokenPipe)))
        .on_error(Arc::new(move |err: &LagerError| {
            assert!(matches!(err, LagerError::Io(_)));
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }))
        .build();

    logger.infof(format_args!("first"));
    logger.child().errorf(format_args!("second"));

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(logger.metrics().dropped_count(), 2);
    assert_eq!(logger.metrics().written_count(), 0);
}

#[test]
fn test_non_finite_field_is_dropped_not_written() {
    let out = SharedBuffer::new();
    let logger = ContextLogger::builder()
        .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
        .with_error_policy(SinkErrorPolicy::Ignore)
        .with_field("ratio", f64::INFINITY)
        .build();

    logger.errorf(format_args!("unrepresentable"));

    assert!(out.is_empty());
    assert_eq!(logger.metrics().dropped_count(), 1);
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("lager.log");
    let file = fs::File::create(&log_file).expect("Failed to create log file");

    let logger = ContextLogger::builder()
        .with_levels(Levels::parse("EWI"))
        .with_drinker(Arc::new(LineDrinker::new(file)))
        .with_file_verbosity(FileVerbosity::None)
        .build();

    for i in 0..10 {
        logger.infof(format_args!("line {}", i));
    }
    logger.debugf(format_args!("never written"));

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[9].contains("msg=\"line 9\""));
    assert!(lines.iter().all(|l| l.starts_with("time=")));
}

#[test]
fn test_supplementary_loggers_share_interface() {
    let out = SharedBuffer::new();
    let loggers: Vec<Box<dyn Lager>> = vec![
        Box::new(
            BasicConfig::default()
                .with_levels(Levels::all())
                .with_drinker(Arc::new(JsonDrinker::new(out.clone())))
                .build(),
        ),
        Box::new(json_logger("EWIDT", &out)),
    ];

    for logger in &loggers {
        logger.infof(format_args!("hello"));
        logger.set_levels(&Levels::empty());
        logger.errorf(format_args!("silenced"));
    }

    let records = out.json_lines();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["msg"] == "hello"));
}

#[test]
fn test_plain_logger_output() {
    let out = SharedBuffer::new();
    let logger = PlainConfig::default()
        .with_levels(Levels::parse("W"))
        .with_output(out.clone())
        .with_timestamp_format(TimestampFormat::Custom("2006/01/02 15:04:05".to_string()))
        .build();

    lager::warn!(logger, "{} retries left", 2);
    lager::error!(logger, "filtered");

    assert_eq!(out.contents(), "2006/01/02 15:04:05 2 retries left\n");
}
