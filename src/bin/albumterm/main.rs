//! albumterm: terminal client for a remote album collection.
//!
//! The list is fetched once at startup and kept locally. Adds and deletes
//! apply immediately and are mirrored to the API in the background; edits of
//! server-known albums wait for the API answer.

mod app;
mod commands;
mod form;
mod palette;
mod render;
mod ui;

use std::io;

use albumterm::config::AppConfig;
use albumterm::prefs::FilePreferenceStore;
use albumterm::remote::{HttpAlbumStore, RemoteStoreAdapter};
use albumterm::telemetry::init_tracing;
use albumterm::{AlbumSynchronizer, ThemeController};
use anyhow::{Context, Result};
use clap::Parser;

use crate::app::App;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    config.validate()?;
    init_tracing(&config).context("failed to open trace log")?;

    let prefs_path = config
        .preferences_path()
        .context("no config directory available; pass --config-dir")?;
    let mut theme = ThemeController::new(FilePreferenceStore::new(prefs_path));
    theme.on_preference_changed(|preference| {
        tracing::info!(theme = %preference, "theme preference applied");
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let store = HttpAlbumStore::new(&config.api_base, config.request_timeout())
        .context("failed to build HTTP client")?;
    let remote = RemoteStoreAdapter::with_tracing(store, runtime.handle().clone());

    if config.is_one_shot() {
        return commands::run_one_shot(
            &config,
            &mut theme,
            &runtime,
            &remote,
            &mut io::stdout().lock(),
        );
    }

    theme.initialize();
    let sync = AlbumSynchronizer::new(remote);
    let mut app = App::new(sync, theme, runtime.handle().clone());
    tracing::info!(api_base = %config.api_base, "starting album UI");

    let result = ui::run_ui(&mut app);
    tracing::info!(pending = app.in_flight(), "waiting for background requests");
    runtime.block_on(app.settle());
    result
}
