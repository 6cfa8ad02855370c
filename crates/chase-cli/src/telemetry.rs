//! Log file setup.

use crate::args::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Append log records at `level` to `log_path`. Without a level nothing is
/// installed and every tracing event is discarded.
pub fn init_logging(level: Option<LogLevel>, log_path: &Path) -> Result<()> {
    let Some(level) = level else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .parse_lossy("");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    info!(level = ?level, path = %log_path.display(), "Logging initialized");
    Ok(())
}
