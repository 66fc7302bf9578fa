//! Remote album store boundary and the adapter that mirrors local mutations to it.
//!
//! Two dispatch modes exist:
//!
//! - [`DispatchMode::Awaited`]: the caller waits for the result (`fetch_all`, `update`).
//! - [`DispatchMode::BestEffort`]: the request is spawned and the caller moves on
//!   (`create`, `delete`). Outcomes only reach the [`RemoteEventSink`].

mod http;
mod sink;
#[cfg(test)]
pub(crate) mod test_support;

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::album::{Album, AlbumDraft};
use crate::error::TransportError;

pub use http::{HttpAlbumStore, DEFAULT_API_BASE};
pub use sink::{
    DispatchMode, MemorySink, RemoteEvent, RemoteEventSink, RemoteOp, RemoteOutcome, TracingSink,
};

/// The external REST resource holding album records.
///
/// The backing service may echo writes without persisting them.
pub trait AlbumStore: Send + Sync + 'static {
    /// `GET /albums`
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Album>, TransportError>> + Send;
    /// `POST /albums`; the server assigns the id.
    fn create(
        &self,
        draft: AlbumDraft,
    ) -> impl Future<Output = Result<Album, TransportError>> + Send;
    /// `PUT /albums/{id}`; the response body is the stored record.
    fn update(
        &self,
        id: u64,
        album: Album,
    ) -> impl Future<Output = Result<Album, TransportError>> + Send;
    /// `DELETE /albums/{id}`
    fn delete(&self, id: u64) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Wraps an [`AlbumStore`] with awaited and best-effort call paths plus telemetry.
pub struct RemoteStoreAdapter<S> {
    store: Arc<S>,
    sink: Arc<dyn RemoteEventSink>,
    runtime: Handle,
    in_flight: Vec<JoinHandle<()>>,
}

impl<S: AlbumStore> RemoteStoreAdapter<S> {
    /// Build an adapter that spawns best-effort requests on `runtime`.
    pub fn new(store: S, sink: Arc<dyn RemoteEventSink>, runtime: Handle) -> Self {
        Self {
            store: Arc::new(store),
            sink,
            runtime,
            in_flight: Vec::new(),
        }
    }

    /// Adapter reporting outcomes through `tracing`.
    pub fn with_tracing(store: S, runtime: Handle) -> Self {
        Self::new(store, Arc::new(TracingSink), runtime)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Album>, TransportError> {
        let result = self.store.fetch_all().await;
        let outcome = match &result {
            Ok(albums) => RemoteOutcome::Succeeded(format!("{} albums", albums.len())),
            Err(err) => RemoteOutcome::Failed(err.clone()),
        };
        self.sink
            .record(&RemoteEvent::new(RemoteOp::FetchAll, DispatchMode::Awaited, outcome));
        result
    }

    pub async fn update(&self, id: u64, album: Album) -> Result<Album, TransportError> {
        let result = self.store.update(id, album).await;
        let outcome = RemoteOutcome::from_album_result(&result);
        self.sink
            .record(&RemoteEvent::new(RemoteOp::Update(id), DispatchMode::Awaited, outcome));
        result
    }

    /// Spawn a POST; the caller never sees the server's answer.
    pub fn create_best_effort(&mut self, draft: AlbumDraft) {
        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.sink);
        self.dispatch(async move {
            let result = store.create(draft).await;
            let outcome = RemoteOutcome::from_album_result(&result);
            sink.record(&RemoteEvent::new(
                RemoteOp::Create,
                DispatchMode::BestEffort,
                outcome,
            ));
        });
    }

    /// Spawn a DELETE; failures are only reported to the sink.
    pub fn delete_best_effort(&mut self, id: u64) {
        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.sink);
        self.dispatch(async move {
            let outcome = match store.delete(id).await {
                Ok(()) => RemoteOutcome::Succeeded(format!("album {id} deleted")),
                Err(err) => RemoteOutcome::Failed(err),
            };
            sink.record(&RemoteEvent::new(
                RemoteOp::Delete(id),
                DispatchMode::BestEffort,
                outcome,
            ));
        });
    }

    /// Number of best-effort requests that have not finished yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Wait for every spawned request to finish. Nothing is cancelled.
    pub async fn settle(&mut self) {
        for handle in self.in_flight.drain(..) {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "best-effort remote task ended abnormally");
            }
        }
    }

    fn dispatch<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(self.runtime.spawn(task));
    }
}
