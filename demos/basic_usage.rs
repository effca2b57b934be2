//! Basic logger usage example
//!
//! Demonstrates level sets, the two drinkers and the supplementary loggers.
//!
//! Run with: cargo run --example basic_usage

use lager::prelude::*;
use lager::{debug, error, info, trace, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Lager - Basic Usage Example ===\n");

    // Line records on stdout, every level enabled
    let logger = ContextLogger::builder()
        .with_levels(Levels::all())
        .with_drinker(Arc::new(LineDrinker::new(std::io::stdout())))
        .with_file_verbosity(FileVerbosity::Short)
        .build();

    println!("1. Logging at different levels:");
    trace!(logger, "This is a trace message");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. Level sets are membership, not thresholds (\"EI\"):");
    logger.set_levels(&Levels::parse("EI"));
    trace!(logger, "Not shown");
    debug!(logger, "Not shown");
    info!(logger, "Shown");
    warn!(logger, "Not shown");
    error!(logger, "Shown");

    println!("\n3. Drinker chosen by name (\"JSON\"):");
    let new_drinker = lager::drinker_from_str("JSON")?;
    let json = ContextLogger::builder()
        .with_levels(Levels::all())
        .with_drinker(new_drinker(Box::new(std::io::stdout())))
        .build();
    info!(json, "Processing {} items", 100);

    println!("\n4. Basic logger (time, level and message only):");
    let basic = BasicLogger::new(BasicConfig::default().with_levels(Levels::parse("EW")));
    warn!(basic, "Retry attempt {} of {}", 3, 5);

    println!("\n5. Plain logger:");
    let plain = PlainLogger::new(PlainConfig::default());
    error!(plain, "Unable to recover from error: {}", "disk full");

    println!("\n=== Example completed successfully ===");

    Ok(())
}
