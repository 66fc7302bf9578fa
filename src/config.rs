//! CLI flag schema so startup behavior is explicit and discoverable.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crate::prefs::{resolve_config_dir, PREFERENCES_FILE};
use crate::remote::DEFAULT_API_BASE;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const MAX_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Parser, Clone)]
#[command(name = "albumterm", about = "Browse and edit albums from a REST API", author, version)]
pub struct AppConfig {
    /// Base URL of the album REST resource
    #[arg(long = "api-base", env = "ALBUMTERM_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Directory holding preferences.toml (defaults to the platform config dir)
    #[arg(long = "config-dir", env = "ALBUMTERM_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Write a JSON trace log (see ALBUMTERM_TRACE_LOG)
    #[arg(long)]
    pub logs: bool,

    /// Disable all logging, overriding --logs
    #[arg(long = "no-logs")]
    pub no_logs: bool,

    /// Print the stored theme and exit
    #[arg(long = "theme-status")]
    pub theme_status: bool,

    /// Toggle the stored theme, print the new value, and exit
    #[arg(long = "toggle-theme")]
    pub toggle_theme: bool,

    /// Fetch albums, print them as tab-separated lines, and exit
    #[arg(long)]
    pub list: bool,
}

impl AppConfig {
    /// Reject flag combinations and values the client cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-HTTP base URL or an out-of-range timeout.
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            bail!("--api-base must start with http:// or https:// (got {base:?})");
        }
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            bail!("--timeout-ms must be between 1 and {MAX_TIMEOUT_MS}");
        }
        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        resolve_config_dir(self.config_dir.as_deref()).map(|dir| dir.join(PREFERENCES_FILE))
    }

    /// Whether a one-shot command replaces the interactive UI.
    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        self.theme_status || self.toggle_theme || self.list
    }
}
