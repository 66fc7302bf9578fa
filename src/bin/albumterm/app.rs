//! Screen state and key handling for the album UI.

use albumterm::prefs::PreferenceStore;
use albumterm::remote::AlbumStore;
use albumterm::router::{Navigator, Route, View};
use albumterm::{AlbumSynchronizer, ThemeController};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Handle;

use crate::form::{self, AlbumForm};
use crate::palette::Palette;

pub(crate) const NO_ALBUM_SELECTED: &str = "Cannot update: No album selected.";
pub(crate) const UPDATE_DONE: &str = "Update Successfully done";
pub(crate) const DELETE_DONE: &str = "Your Album Deleted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Error,
}

/// Blocking message; the next key press dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub(crate) struct App<S, P> {
    sync: AlbumSynchronizer<S>,
    theme: ThemeController<P>,
    nav: Navigator,
    runtime: Handle,
    palette: Palette,
    cursor: usize,
    add_form: AlbumForm,
    edit_form: AlbumForm,
    notice: Option<Notice>,
    should_quit: bool,
}

impl<S: AlbumStore, P: PreferenceStore> App<S, P> {
    /// `theme` is expected to be initialized already.
    pub(crate) fn new(sync: AlbumSynchronizer<S>, theme: ThemeController<P>, runtime: Handle) -> Self {
        let palette = Palette::for_hint(&theme.hint());
        Self {
            sync,
            theme,
            nav: Navigator::new(),
            runtime,
            palette,
            cursor: 0,
            add_form: AlbumForm::new(),
            edit_form: AlbumForm::new(),
            notice: None,
            should_quit: false,
        }
    }

    pub(crate) fn view(&self) -> View<'_> {
        self.nav.view(&self.sync, &self.theme)
    }

    pub(crate) fn palette(&self) -> &Palette {
        &self.palette
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn add_form(&self) -> &AlbumForm {
        &self.add_form
    }

    pub(crate) fn edit_form(&self) -> &AlbumForm {
        &self.edit_form
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch the collection once at startup, blocking until the request ends.
    /// Not repeated later: the remote does not keep local writes.
    pub(crate) fn load(&mut self) {
        self.runtime.block_on(self.sync.load());
        self.clamp_cursor();
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.sync.in_flight()
    }

    /// Wait for best-effort requests before the process exits.
    pub(crate) async fn settle(&mut self) {
        self.sync.settle().await;
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.notice.take().is_some() {
            return;
        }
        if ctrl && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            return;
        }
        match self.nav.current() {
            Route::List => self.handle_list_key(key),
            Route::AddAlbum => self.handle_add_key(key),
            Route::UpdateAlbum => self.handle_edit_key(key),
        }
    }

    fn toggle_theme(&mut self) {
        let hint = self.theme.toggle();
        self.palette = Palette::for_hint(&hint);
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.sync.records().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.sync.records().len().saturating_sub(1),
            KeyCode::Char('a') => {
                self.add_form.clear();
                self.nav.go(Route::AddAlbum);
            }
            KeyCode::Char('u') | KeyCode::Enter => self.open_editor(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.nav.go(Route::List),
            KeyCode::Enter => self.submit_add(),
            _ => edit_field(&mut self.add_form, key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.nav.go(Route::List),
            KeyCode::Enter => self.submit_edit(),
            _ => edit_field(&mut self.edit_form, key),
        }
    }

    fn open_editor(&mut self) {
        let Some(album) = self.sync.records().get(self.cursor).cloned() else {
            return;
        };
        let token = self.sync.select_for_edit(&album);
        self.edit_form = AlbumForm::prefilled(&album);
        self.nav.open_editor(token);
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.sync.records().get(self.cursor).map(|album| album.id) else {
            return;
        };
        if self.sync.delete(id) {
            self.clamp_cursor();
            self.notice = Some(Notice::info(DELETE_DONE));
        }
    }

    fn submit_add(&mut self) {
        let (owner_id, title) = match form::parse_new_album(&self.add_form) {
            Ok(parsed) => parsed,
            Err(message) => {
                self.notice = Some(Notice::error(message));
                return;
            }
        };
        match self.sync.create(owner_id, &title) {
            Ok(album) => {
                self.add_form.clear();
                self.nav.go(Route::List);
                self.cursor = self.sync.records().len().saturating_sub(1);
                self.notice = Some(Notice::info(format!(
                    "New Album (ID: {}) added successfully to the bottom",
                    album.id
                )));
            }
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }

    fn submit_edit(&mut self) {
        let original = self
            .nav
            .edit_token()
            .and_then(|token| self.sync.selection_for(token))
            .cloned();
        let Some(original) = original else {
            self.notice = Some(Notice::error(NO_ALBUM_SELECTED));
            return;
        };
        let (title, owner_id) = match form::parse_album_update(&self.edit_form, &original) {
            Ok(parsed) => parsed,
            Err(message) => {
                self.notice = Some(Notice::error(message));
                return;
            }
        };
        let result = self
            .runtime
            .block_on(self.sync.update(original.id, &title, owner_id, &original));
        match result {
            Ok(_) => {
                self.nav.go(Route::List);
                self.notice = Some(Notice::info(UPDATE_DONE));
            }
            Err(err) => {
                self.notice = Some(Notice::error(format!("Failed to update album: {err}")));
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.sync.records().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

fn edit_field(form: &mut AlbumForm, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.push_char(ch),
        _ => {}
    }
}
