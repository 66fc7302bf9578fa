//! Error taxonomy shared by the synchronizer, the remote adapter, and the UI.

/// Input rejected before any state mutation or remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NonPositiveOwnerId(i64),
    BlankTitle,
    NonPositiveId,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveOwnerId(value) => {
                write!(f, "user id must be a positive number (got {value})")
            }
            Self::BlankTitle => write!(f, "title must not be empty"),
            Self::NonPositiveId => write!(f, "album id must be a positive number"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure talking to the remote album resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, timeout, or other request-level failure.
    Request(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "request failed: {msg}"),
            Self::Status(code) => write!(f, "HTTP error status {code}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Errors surfaced by collection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumError {
    Validation(ValidationError),
    /// Update target is not in the local collection.
    NotFound(u64),
    Transport(TransportError),
}

impl std::fmt::Display for AlbumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::NotFound(id) => write!(f, "album {id} not found"),
            Self::Transport(err) => write!(f, "remote store: {err}"),
        }
    }
}

impl std::error::Error for AlbumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Transport(err) => Some(err),
        }
    }
}

impl From<ValidationError> for AlbumError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<TransportError> for AlbumError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn album_error_display_names_the_failing_layer() {
        let err = AlbumError::from(TransportError::Status(500));
        assert_eq!(err.to_string(), "remote store: HTTP error status 500");
        assert!(err.source().is_some());

        let err = AlbumError::NotFound(42);
        assert_eq!(err.to_string(), "album 42 not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_error_reports_offending_value() {
        let err = AlbumError::from(ValidationError::NonPositiveOwnerId(-3));
        assert!(err.to_string().contains("-3"));
    }
}
