//! JSON output example
//!
//! Run with: cargo run --example json_output

use rust_console_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::builder().level(LogLevel::Debug).colors(false).build()?;

    logger.info_json("service started")?;
    logger.debug_json("cache warmed")?;
    logger.warn_json("disk usage at 91%")?;

    // Plain text records without a timestamp prefix
    let line = logger.format_human(LogLevel::Info, "formatted but not written", true)?;
    println!("{}", line);

    Ok(())
}
