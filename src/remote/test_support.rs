use std::sync::{Arc, Mutex};

use crate::album::{Album, AlbumDraft};
use crate::error::TransportError;
use crate::lock_or_recover;
use crate::remote::AlbumStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreCall {
    FetchAll,
    Create(AlbumDraft),
    Update(u64, Album),
    Delete(u64),
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<StoreCall>,
    seed: Vec<Album>,
    fail_with: Option<TransportError>,
    update_response: Option<Album>,
}

/// In-process stand-in for the REST resource that records every call.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub(crate) fn seeded(seed: Vec<Album>) -> Self {
        let store = Self::default();
        lock_or_recover(&store.state, "FakeStore::seeded").seed = seed;
        store
    }

    pub(crate) fn failing(err: TransportError) -> Self {
        let store = Self::default();
        lock_or_recover(&store.state, "FakeStore::failing").fail_with = Some(err);
        store
    }

    pub(crate) fn with_update_response(self, album: Album) -> Self {
        lock_or_recover(&self.state, "FakeStore::with_update_response").update_response =
            Some(album);
        self
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        lock_or_recover(&self.state, "FakeStore::calls").calls.clone()
    }

    fn record(&self, call: StoreCall) -> Option<TransportError> {
        let mut state = lock_or_recover(&self.state, "FakeStore::record");
        state.calls.push(call);
        state.fail_with.clone()
    }
}

impl AlbumStore for FakeStore {
    async fn fetch_all(&self) -> Result<Vec<Album>, TransportError> {
        if let Some(err) = self.record(StoreCall::FetchAll) {
            return Err(err);
        }
        Ok(lock_or_recover(&self.state, "FakeStore::fetch_all").seed.clone())
    }

    async fn create(&self, draft: AlbumDraft) -> Result<Album, TransportError> {
        if let Some(err) = self.record(StoreCall::Create(draft.clone())) {
            return Err(err);
        }
        Ok(Album::new(101, draft.user_id, draft.title))
    }

    async fn update(&self, id: u64, album: Album) -> Result<Album, TransportError> {
        if let Some(err) = self.record(StoreCall::Update(id, album.clone())) {
            return Err(err);
        }
        let response = lock_or_recover(&self.state, "FakeStore::update")
            .update_response
            .clone();
        Ok(response.unwrap_or(album))
    }

    async fn delete(&self, id: u64) -> Result<(), TransportError> {
        match self.record(StoreCall::Delete(id)) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
