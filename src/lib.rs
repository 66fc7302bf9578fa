//! Album collection client: local-first CRUD over a non-durable REST resource.

pub mod album;
pub mod config;
pub mod error;
mod lock;
pub mod prefs;
pub mod remote;
pub mod router;
pub mod sync;
pub mod telemetry;
pub mod terminal_restore;
pub mod theme;

pub use album::{Album, AlbumDraft};
pub use error::{AlbumError, TransportError, ValidationError};
pub(crate) use lock::lock_or_recover;
pub use sync::AlbumSynchronizer;
pub use theme::{ThemeController, ThemePreference};
