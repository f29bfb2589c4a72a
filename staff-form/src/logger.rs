//! Logging Infrastructure
//!
//! Console logging to stderr, human-readable or JSON. `RUST_LOG` takes
//! precedence over the configured level.

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g., "info", "staff_form=debug")
/// * `json_format` - Whether to use JSON format
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (json_layer, text_layer) = if json_format {
        let layer = fmt::layer()
            .json()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::debug!(level, json_format, "Tracing initialized");
    Ok(())
}
