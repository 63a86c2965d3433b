//! Log setup for the terminal front end.
//!
//! The game owns stdout, so logs only go to a file. Set `TILES_LOG_DIR` to
//! enable a daily-rotated log there; `RUST_LOG` overrides the default filter.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_DIR: &str = "TILES_LOG_DIR";

const DEFAULT_FILTER: &str = "tui_tiles=info,tui_tiles_core=info";
const LOG_FILE_PREFIX: &str = "tui-tiles.log";

/// Install the file subscriber if `TILES_LOG_DIR` is set.
///
/// The returned guard must stay alive until exit so buffered lines are flushed.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Some(dir) = env::var(ENV_LOG_DIR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(None);
    };

    fs::create_dir_all(&dir).with_context(|| format!("could not create log directory {dir}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(guard))
}
