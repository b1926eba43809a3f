//! Formatter showcase
//!
//! Formats the same records in every output format.
//!
//! Run with: cargo run --example formatters

use rust_log_formats::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Log Formats - Formatter Showcase ===\n");

    let config = FormatterConfig::new().with_hostname(HostnameSource::Cached);

    let plain = LogRecord::new("demo", LogLevel::Info, "Service started on port %d")
        .with_location("demos/formatters.rs", 16)
        .with_function("main")
        .with_arg(8080);

    let rich = LogRecord::new("demo.http", LogLevel::Warning, "Slow request: %s took %.1f ms")
        .with_location("demos/formatters.rs", 21)
        .with_function("main")
        .with_arg("GET /api/users")
        .with_arg(812.4)
        .with_extra("user_id", 12345)
        .with_extra("request_id", "req-abc-123")
        .with_extra("cached", false);

    println!("1. Every format, no extras:");
    for format in OutputFormat::ALL {
        let formatter = format.build(&config)?;
        println!("   {:<14} {}", formatter.name(), formatter.format(&plain)?);
    }

    println!("\n2. Every format, with extras:");
    for format in OutputFormat::ALL {
        let formatter = format.build(&config)?;
        println!("   {:<14} {}", formatter.name(), formatter.format(&rich)?);
    }

    println!("\n3. Format chosen from configuration:");
    let from_file = FormatterConfig::from_json(r#"{"timezone":"utc","hostname":{"fixed":"web-1"}}"#)?;
    let format: OutputFormat = "bunyan".parse()?;
    println!("   {}", format.build(&from_file)?.format(&plain)?);

    println!("\n4. Interpolation errors are reported, not swallowed:");
    let broken = LogRecord::new("demo", LogLevel::Error, "%s and %s").with_arg("one");
    match TextSimpleFormatter::new().format(&broken) {
        Ok(line) => println!("   unexpected: {}", line),
        Err(err) => println!("   error: {}", err),
    }

    #[cfg(feature = "log-bridge")]
    {
        println!("\n5. Records from the log facade:");
        let kvs = [("attempt", log::kv::Value::from(3i64))];
        let record = LogRecord::from_log_record(
            &log::Record::builder()
                .args(format_args!("retrying upstream call"))
                .level(log::Level::Warn)
                .target("demo::client")
                .key_values(&kvs)
                .build(),
        )?;
        println!("   {}", TextCompactFormatter::new().format(&record)?);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
