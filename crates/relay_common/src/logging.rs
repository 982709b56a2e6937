//! Logging utilities for the relay.
//!
//! Provides a single place to initialize the tracing subscriber so every
//! binary logs the same way.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// Call once at process start, before serving traffic.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific minimum log level.
///
/// `RUST_LOG` still takes precedence for other targets; the given level is
/// applied to the relay's own crates.
pub fn init_with_level(level: Level) {
    let filter =
        EnvFilter::from_default_env().add_directive(format!("relay={}", level).parse().unwrap());

    // try_init so tests that initialize twice do not panic.
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
