//! Optional JSON trace log; the terminal belongs to the UI, so nothing is logged there.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;

use crate::config::AppConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

const TRACE_LOG_ENV: &str = "ALBUMTERM_TRACE_LOG";

/// Only this crate's events; HTTP client internals stay out of the log.
const LOG_TARGET: &str = "albumterm";

#[must_use]
pub fn tracing_log_path() -> PathBuf {
    env::var(TRACE_LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("albumterm_trace.jsonl"))
}

/// Where the trace log goes, or `None` unless `--logs` is set without `--no-logs`.
#[must_use]
pub fn trace_log_target(config: &AppConfig) -> Option<PathBuf> {
    (config.logs && !config.no_logs).then(tracing_log_path)
}

fn install(path: PathBuf, once: &OnceLock<()>) -> io::Result<()> {
    if once.get().is_some() {
        return Ok(());
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    once.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .finish()
            .with(Targets::new().with_target(LOG_TARGET, LevelFilter::DEBUG));
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    Ok(())
}

/// Install the global subscriber once when logging is enabled.
///
/// # Errors
///
/// Returns an error if the trace file cannot be opened.
pub fn init_tracing(config: &AppConfig) -> io::Result<()> {
    match trace_log_target(config) {
        Some(path) => install(path, &TRACING_INIT),
        None => Ok(()),
    }
}
