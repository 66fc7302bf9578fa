//! Path-to-view routing for the three album screens.
//!
//! The edit screen is never populated from the path alone: it needs the
//! [`EditSelection`] token handed out by
//! [`AlbumSynchronizer::select_for_edit`](crate::sync::AlbumSynchronizer::select_for_edit).
//! Without one it renders [`EditView::Empty`].

use crate::album::Album;
use crate::prefs::PreferenceStore;
use crate::remote::AlbumStore;
use crate::sync::AlbumSynchronizer;
use crate::theme::{PresentationHint, ThemeController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    AddAlbum,
    UpdateAlbum,
}

/// Static route table. No nested or parameterized routes.
pub const ROUTES: [(&str, Route); 3] = [
    ("/", Route::List),
    ("/add-album", Route::AddAlbum),
    ("/update-album", Route::UpdateAlbum),
];

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::List => "/",
            Route::AddAlbum => "/add-album",
            Route::UpdateAlbum => "/update-album",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }

    /// The navbar link shown on this route's screen.
    #[must_use]
    pub fn nav_link(self) -> NavLink {
        match self {
            Route::List => NavLink {
                label: "Add Album",
                target: Route::AddAlbum,
            },
            Route::AddAlbum | Route::UpdateAlbum => NavLink {
                label: "Home",
                target: Route::List,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Route,
}

/// Proof that a specific album was explicitly chosen for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSelection {
    album_id: u64,
    serial: u64,
}

impl EditSelection {
    pub(crate) fn new(album_id: u64, serial: u64) -> Self {
        Self { album_id, serial }
    }

    #[must_use]
    pub fn album_id(self) -> u64 {
        self.album_id
    }

    pub(crate) fn serial(self) -> u64 {
        self.serial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditView<'a> {
    /// Reached without a live selection.
    Empty,
    Ready(&'a Album),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBody<'a> {
    /// Full collection; bound to delete and select-for-edit.
    List(&'a [Album]),
    /// Bound to create.
    AddAlbum,
    /// Bound to update.
    UpdateAlbum(EditView<'a>),
}

/// Snapshot handed to the presentation layer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    pub route: Route,
    pub nav: NavLink,
    pub hint: PresentationHint,
    pub body: ViewBody<'a>,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
    edit_token: Option<EditSelection>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    #[must_use]
    pub fn edit_token(&self) -> Option<EditSelection> {
        self.edit_token
    }

    /// Switch to the route bound to `path`. Unknown paths leave the navigator
    /// where it is and return `false`. Any edit selection is dropped.
    pub fn navigate(&mut self, path: &str) -> bool {
        match Route::from_path(path) {
            Some(route) => {
                self.go(route);
                true
            }
            None => {
                tracing::debug!(path, "no route for path");
                false
            }
        }
    }

    pub fn go(&mut self, route: Route) {
        self.current = route;
        self.edit_token = None;
    }

    /// Enter the edit screen for an explicit selection.
    pub fn open_editor(&mut self, token: EditSelection) {
        self.current = Route::UpdateAlbum;
        self.edit_token = Some(token);
    }

    /// Bind the current route to the state it needs.
    pub fn view<'a, S, P>(
        &self,
        sync: &'a AlbumSynchronizer<S>,
        theme: &ThemeController<P>,
    ) -> View<'a>
    where
        S: AlbumStore,
        P: PreferenceStore,
    {
        let body = match self.current {
            Route::List => ViewBody::List(sync.records()),
            Route::AddAlbum => ViewBody::AddAlbum,
            Route::UpdateAlbum => {
                let selected = self
                    .edit_token
                    .and_then(|token| sync.selection_for(token));
                match selected {
                    Some(album) => ViewBody::UpdateAlbum(EditView::Ready(album)),
                    None => ViewBody::UpdateAlbum(EditView::Empty),
                }
            }
        };
        View {
            route: self.current,
            nav: self.current.nav_link(),
            hint: theme.hint(),
            body,
        }
    }
}
