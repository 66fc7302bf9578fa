//! One-shot commands that run instead of the interactive UI.

use std::io::Write;

use albumterm::config::AppConfig;
use albumterm::prefs::PreferenceStore;
use albumterm::remote::{AlbumStore, RemoteStoreAdapter};
use albumterm::{Album, ThemeController};
use anyhow::{Context, Result};
use tokio::runtime::Runtime;

pub(crate) fn theme_status<P: PreferenceStore>(theme: &mut ThemeController<P>) -> String {
    theme.initialize();
    theme.preference().to_string()
}

pub(crate) fn toggle_theme<P: PreferenceStore>(theme: &mut ThemeController<P>) -> String {
    theme.initialize();
    theme.toggle().preference.to_string()
}

/// Run whichever one-shot flag is set. Theme flags win over `--list`.
///
/// # Errors
///
/// Returns an error if listing fails or output cannot be written.
pub(crate) fn run_one_shot<S: AlbumStore, P: PreferenceStore>(
    config: &AppConfig,
    theme: &mut ThemeController<P>,
    runtime: &Runtime,
    remote: &RemoteStoreAdapter<S>,
    out: &mut impl Write,
) -> Result<()> {
    if config.theme_status {
        writeln!(out, "{}", theme_status(theme))?;
    } else if config.toggle_theme {
        writeln!(out, "{}", toggle_theme(theme))?;
    } else if config.list {
        list_albums(runtime, remote, out)?;
    }
    out.flush()?;
    Ok(())
}

fn album_line(album: &Album) -> String {
    format!("{}\t{}\t{}", album.id, album.user_id, album.title)
}

/// Fetch the collection once and print one tab-separated line per album.
///
/// # Errors
///
/// Returns an error if the fetch fails or stdout cannot be written.
pub(crate) fn list_albums<S: AlbumStore>(
    runtime: &Runtime,
    remote: &RemoteStoreAdapter<S>,
    out: &mut impl Write,
) -> Result<()> {
    let albums = runtime
        .block_on(remote.fetch_all())
        .context("failed to fetch albums")?;
    for album in &albums {
        writeln!(out, "{}", album_line(album))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{seed, EchoStore};
    use albumterm::prefs::{MemoryPreferenceStore, THEME_KEY};
    use albumterm::remote::MemorySink;
    use albumterm::ThemePreference;
    use std::sync::Arc;

    #[test]
    fn theme_commands_report_and_persist() {
        let mut theme =
            ThemeController::new(MemoryPreferenceStore::with_value(THEME_KEY, "dark"));
        assert_eq!(theme_status(&mut theme), "dark");
        assert_eq!(toggle_theme(&mut theme), "light");
        assert_eq!(theme.preference(), ThemePreference::Light);
    }

    #[test]
    fn one_shot_dispatch_follows_flags() {
        use clap::Parser;

        let runtime = Runtime::new().expect("runtime");
        let store = EchoStore {
            seed: seed(),
            ..EchoStore::default()
        };
        let calls = Arc::clone(&store.calls);
        let remote = RemoteStoreAdapter::new(
            store,
            Arc::new(MemorySink::default()),
            runtime.handle().clone(),
        );
        let mut theme = ThemeController::new(MemoryPreferenceStore::default());

        let toggle = AppConfig::parse_from(["albumterm", "--toggle-theme"]);
        assert!(toggle.is_one_shot());
        let mut out = Vec::new();
        run_one_shot(&toggle, &mut theme, &runtime, &remote, &mut out).expect("toggle");
        assert_eq!(String::from_utf8(out).expect("utf8"), "dark\n");
        assert!(calls.lock().expect("calls lock").is_empty());

        let list = AppConfig::parse_from(["albumterm", "--list"]);
        let mut out = Vec::new();
        run_one_shot(&list, &mut theme, &runtime, &remote, &mut out).expect("list");
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 3);
    }

    #[test]
    fn list_prints_tab_separated_rows() {
        let runtime = Runtime::new().expect("runtime");
        let remote = RemoteStoreAdapter::new(
            EchoStore {
                seed: seed(),
                ..EchoStore::default()
            },
            Arc::new(MemorySink::default()),
            runtime.handle().clone(),
        );
        let mut out = Vec::new();
        list_albums(&runtime, &remote, &mut out).expect("list");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().next(), Some("1\t1\tquidem molestiae enim"));
    }

    #[test]
    fn list_surfaces_fetch_failure() {
        let runtime = Runtime::new().expect("runtime");
        let remote = RemoteStoreAdapter::new(
            EchoStore {
                fail_with: Some(503),
                ..EchoStore::default()
            },
            Arc::new(MemorySink::default()),
            runtime.handle().clone(),
        );
        let err = list_albums(&runtime, &remote, &mut Vec::new()).expect_err("fetch fails");
        assert!(err.to_string().contains("failed to fetch albums"));
    }
}
