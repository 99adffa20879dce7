//! Console logging for the application.
//!
//! Everything goes through `tracing`. The subscriber writes to the terminal
//! only; the application persists nothing.
//!
//! ```no_run
//! use gdp_consumption::logging;
//!
//! // Initialize once at app startup
//! logging::init().expect("Failed to initialize logging");
//!
//! tracing::info!("App started");
//! ```

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the env filter - defaults to INFO, allows override with `RUST_LOG`.
///
/// # Errors
///
/// Returns error if neither `RUST_LOG` nor the default directive parses.
pub fn env_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")
}

/// Initializes the global subscriber with a console layer.
///
/// # Errors
///
/// Returns error if the filter cannot be built or a subscriber is already set.
pub fn init() -> Result<()> {
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(true)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(stdout_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized");

    Ok(())
}
