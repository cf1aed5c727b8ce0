use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG: &str = "SCHOLARFRAME_LOG";

/// Initialize logging to a file in the logs directory.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr
/// once this returns. Level is controlled by `SCHOLARFRAME_LOG`
/// (`info` by default).
pub fn init_logging() -> Result<PathBuf> {
    let logs_dir = PathBuf::from("logs");
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let file_name = format!("scholarframe_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
    let log_file = logs_dir.join(&file_name);
    let appender = tracing_appender::rolling::never(&logs_dir, &file_name);

    let env_filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("=== {} log started at {} ===", crate::constants::APP_NAME, Local::now());
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}
