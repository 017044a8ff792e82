//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` output from this crate to the javascript console.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        Ok(()) => tracing::info!("Initialized logs"),
        Err(e) => tracing::debug!("logging already initialized: {e}"),
    }
}
