//! Application logging
//!
//! Logs go to stderr, filtered by `RUST_LOG`. With `--log-file` they are also
//! written to a daily file under ~/.config/fontshelf/logs/.

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "fontshelf=info,tower_http=info";

/// Prefix of the daily log files
pub const LOG_FILE_PREFIX: &str = "fontshelf.log";

/// Install the global subscriber.
///
/// When `logs_dir` is given, the returned guard must stay alive for buffered
/// file output to be flushed.
pub fn init_logging(logs_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, guard) = match logs_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(file_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    if let Some(dir) = logs_dir {
        tracing::info!(
            "=== fontshelf started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        tracing::info!("Logs also written to: {:?}", dir);
    }

    Ok(guard)
}
