//! Tracing bootstrap for host applications.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless the `STOCKROOM_LOG` env var names a file
/// path, so embedding hosts keep their stdout/stderr clean by default.
/// The filter honors `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("STOCKROOM_LOG").ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
