//! Basic logger usage example
//!
//! Demonstrates level filtering, stream routing and time format changes.
//!
//! Run with: LOG_LEVEL=debug cargo run --example basic_usage

use rust_console_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Console Logger - Basic Usage Example ===\n");

    // Level comes from LOG_LEVEL; at debug the logger announces itself
    let mut logger = Logger::from_env()?;
    println!("Resolved level: {}\n", logger.level());

    println!("1. Logging at different levels (error/warn go to stderr):");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. Raising the threshold to warn:");
    logger.set_level(LogLevel::Warn);
    if logger.info("Info message (hidden)")?.is_none() {
        println!("   info record was filtered out");
    }
    logger.warn("Warning message (visible)")?;

    println!("\n3. Custom time format:");
    logger.set_time_format("%Y-%m-%d %H:%M:%S%.3f");
    logger.error("Timestamp now includes the date")?;

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
