//! Authoritative local album collection with optimistic mutations mirrored to the remote store.
//!
//! Local state always changes first. Create and delete are then mirrored
//! best-effort; updates to seeded records (id <= 100) wait for the remote
//! answer and take it as the stored value. Records created locally are never
//! sent as updates since the remote resource does not keep them.

use crate::album::{
    next_local_id, validate_id, validate_owner_id, validate_title, Album, AlbumDraft,
};
use crate::error::AlbumError;
use crate::remote::{AlbumStore, RemoteStoreAdapter};
use crate::router::EditSelection;

pub struct AlbumSynchronizer<S> {
    records: Vec<Album>,
    selected: Option<Album>,
    selection_serial: u64,
    remote: RemoteStoreAdapter<S>,
}

impl<S: AlbumStore> AlbumSynchronizer<S> {
    pub fn new(remote: RemoteStoreAdapter<S>) -> Self {
        Self::with_records(remote, Vec::new())
    }

    pub fn with_records(remote: RemoteStoreAdapter<S>, records: Vec<Album>) -> Self {
        Self {
            records,
            selected: None,
            selection_serial: 0,
            remote,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Album] {
        &self.records
    }

    /// Last album chosen for editing, possibly stale.
    #[must_use]
    pub fn selected(&self) -> Option<&Album> {
        self.selected.as_ref()
    }

    /// The selected album, only if `token` came from the latest selection.
    #[must_use]
    pub fn selection_for(&self, token: EditSelection) -> Option<&Album> {
        if token.serial() != self.selection_serial {
            return None;
        }
        self.selected
            .as_ref()
            .filter(|album| album.id == token.album_id())
    }

    #[must_use]
    pub fn next_local_id(&self) -> u64 {
        next_local_id(&self.records)
    }

    /// Replace the collection with the remote list. On failure the current
    /// records stay as they are; the error only reaches the telemetry sink.
    pub async fn load(&mut self) {
        match self.remote.fetch_all().await {
            Ok(albums) => {
                tracing::info!(count = albums.len(), "album collection loaded");
                self.records = albums;
            }
            Err(err) => {
                tracing::debug!(error = %err, kept = self.records.len(), "keeping current albums");
            }
        }
    }

    /// Append a new album with a locally assigned id and mirror it best-effort.
    ///
    /// # Errors
    ///
    /// [`AlbumError::Validation`] for a non-positive owner id or blank title;
    /// nothing is mutated or sent in that case.
    pub fn create(&mut self, owner_id: i64, title: &str) -> Result<Album, AlbumError> {
        let user_id = validate_owner_id(owner_id)?;
        validate_title(title)?;

        let album = Album::new(self.next_local_id(), user_id, title);
        self.records.push(album.clone());
        self.remote.create_best_effort(AlbumDraft {
            user_id,
            title: title.to_string(),
        });
        tracing::debug!(id = album.id, "album created locally");
        Ok(album)
    }

    /// Replace the album matching `original.id`, keeping its position.
    ///
    /// # Errors
    ///
    /// - [`AlbumError::Validation`] for bad input.
    /// - [`AlbumError::NotFound`] if `original` is no longer in the collection.
    /// - [`AlbumError::Transport`] if the remote update of a seeded album fails;
    ///   the collection is left untouched.
    pub async fn update(
        &mut self,
        id: u64,
        new_title: &str,
        new_owner_id: i64,
        original: &Album,
    ) -> Result<Album, AlbumError> {
        validate_id(id)?;
        let user_id = validate_owner_id(new_owner_id)?;
        validate_title(new_title)?;

        let index = self
            .records
            .iter()
            .position(|album| album.id == original.id)
            .ok_or(AlbumError::NotFound(original.id))?;

        let candidate = Album::new(id, user_id, new_title);
        let stored = if candidate.is_seeded() {
            self.remote.update(id, candidate).await?
        } else {
            tracing::debug!(id, "local-only album; skipping remote update");
            candidate
        };
        self.records[index] = stored.clone();
        Ok(stored)
    }

    /// Remove the first album with `id` and mirror the delete best-effort.
    ///
    /// Returns whether a record was removed. An unknown id is not an error.
    pub fn delete(&mut self, id: u64) -> bool {
        self.remote.delete_best_effort(id);
        match self.records.iter().position(|album| album.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => {
                tracing::debug!(id, "delete of unknown album id ignored");
                false
            }
        }
    }

    /// Store a copy of `album` for the edit view and return the token that unlocks it.
    pub fn select_for_edit(&mut self, album: &Album) -> EditSelection {
        self.selection_serial = self.selection_serial.wrapping_add(1);
        self.selected = Some(album.clone());
        EditSelection::new(album.id, self.selection_serial)
    }

    /// Wait for in-flight best-effort requests.
    pub async fn settle(&mut self) {
        self.remote.settle().await;
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.remote.in_flight()
    }
}
