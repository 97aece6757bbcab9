// Patchup - an idempotent, config-driven text patch runner

pub mod config;
pub mod document;
pub mod error;
pub mod patch;
pub mod runner;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize patchup with default settings
pub fn init() -> Result<()> {
    // Default to colored output for CLI usage
    init_with_logger(true)
}

/// Initialize patchup with custom logger configuration
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs.
/// Logs go to stderr so the run report on stdout stays machine-readable.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing patchup v{}", version());

    Ok(())
}
