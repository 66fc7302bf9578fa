//! Telemetry sink for remote call outcomes.

use std::sync::Mutex;

use crate::album::Album;
use crate::error::TransportError;
use crate::lock_or_recover;

/// How the caller relates to the outcome of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// The caller waits for the result and acts on it.
    Awaited,
    /// The caller does not wait; the outcome is only observable here.
    BestEffort,
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DispatchMode::Awaited => "awaited",
            DispatchMode::BestEffort => "best-effort",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    FetchAll,
    Create,
    Update(u64),
    Delete(u64),
}

impl std::fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteOp::FetchAll => write!(f, "GET /albums"),
            RemoteOp::Create => write!(f, "POST /albums"),
            RemoteOp::Update(id) => write!(f, "PUT /albums/{id}"),
            RemoteOp::Delete(id) => write!(f, "DELETE /albums/{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// Short human-readable summary of the response.
    Succeeded(String),
    Failed(TransportError),
}

impl RemoteOutcome {
    pub(crate) fn from_album_result(result: &Result<Album, TransportError>) -> Self {
        match result {
            Ok(album) => Self::Succeeded(format!(
                "album {} (userId {}): {}",
                album.id, album.user_id, album.title
            )),
            Err(err) => Self::Failed(err.clone()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEvent {
    pub op: RemoteOp,
    pub mode: DispatchMode,
    pub outcome: RemoteOutcome,
}

impl RemoteEvent {
    #[must_use]
    pub fn new(op: RemoteOp, mode: DispatchMode, outcome: RemoteOutcome) -> Self {
        Self { op, mode, outcome }
    }
}

/// Receives every remote outcome, including ones nobody waits for.
pub trait RemoteEventSink: Send + Sync {
    fn record(&self, event: &RemoteEvent);
}

/// Default sink: structured `tracing` events, never shown in the UI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RemoteEventSink for TracingSink {
    fn record(&self, event: &RemoteEvent) {
        match &event.outcome {
            RemoteOutcome::Succeeded(summary) => tracing::info!(
                op = %event.op,
                mode = %event.mode,
                summary = %summary,
                "remote call succeeded"
            ),
            RemoteOutcome::Failed(err) => tracing::warn!(
                op = %event.op,
                mode = %event.mode,
                error = %err,
                "remote call failed"
            ),
        }
    }
}

/// Keeps every event in memory; handy for inspection and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<RemoteEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn events(&self) -> Vec<RemoteEvent> {
        lock_or_recover(&self.events, "MemorySink::events").clone()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<RemoteEvent> {
        self.events()
            .into_iter()
            .filter(|event| !event.outcome.is_success())
            .collect()
    }
}

impl RemoteEventSink for MemorySink {
    fn record(&self, event: &RemoteEvent) {
        lock_or_recover(&self.events, "MemorySink::record").push(event.clone());
    }
}
