//! Context logging example
//!
//! Demonstrates fields, children, error context, stacktraces and
//! configuration from the environment.
//!
//! Run with: LAGER_LEVELS=EWID cargo run --example context_logging

use lager::prelude::*;
use lager::{error, info, warn};
use std::sync::Arc;
use std::thread;

fn handle_request(logger: &ContextLogger, id: u32) {
    let request = logger.with([("request_id", format!("r-{}", id))]);
    info!(request, "request started");

    if id % 2 == 1 {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
        warn!(request.with_error(Some(&err)), "request {} degraded", id);
    }
}

fn main() -> Result<()> {
    println!("=== Lager - Context Logging Example ===\n");

    // Environment first, then code-level overrides
    let logger = ContextConfig::from_env()?
        .with_field("service", "checkout")
        .with_file_verbosity(FileVerbosity::Package)
        .build();

    println!("Levels from the environment: {}", logger.levels());

    println!("\n1. Fields set in place:");
    logger.set("version", "1.4.2");
    info!(logger, "service ready");
    logger.unset("version");

    println!("\n2. One child per task:");
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let worker = logger.child();
            worker.set("worker", id as i64);
            thread::spawn(move || handle_request(&worker, id))
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    println!("\n3. Line records with a stacktrace on Error:");
    let traced = ContextLogger::builder()
        .with_levels(Levels::parse("E"))
        .with_drinker(Arc::new(LineDrinker::new(std::io::stdout())))
        .with_stacktraces(true)
        .with_field("service", "checkout")
        .build();
    error!(traced, "payment provider unreachable");

    println!("\n4. Counters:");
    println!(
        "written={} dropped={}",
        logger.metrics().written_count(),
        logger.metrics().dropped_count()
    );

    println!("\n=== Example completed successfully ===");

    Ok(())
}
