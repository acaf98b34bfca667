//! Error types for the Plume core library.

use thiserror::Error;

/// All errors that can occur within the Plume core library.
#[derive(Debug, Error)]
pub enum PlumeError {
    /// A note ID was requested that does not exist in the collection.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// An I/O operation on the durable medium failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The durable medium rejected a read or write for a non-I/O reason.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The note collection could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`PlumeError`].
pub type Result<T> = std::result::Result<T, PlumeError>;

impl PlumeError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::Io(e) => format!("Failed to save: {e}"),
            Self::Storage(msg) => format!("Failed to save: {msg}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_mentions_note() {
        let e = PlumeError::NoteNotFound("abc".to_string());
        assert!(e.to_string().contains("abc"));
        assert!(e.user_message().contains("no longer exists"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e = PlumeError::from(io);
        assert!(matches!(e, PlumeError::Io(_)));
        assert!(e.user_message().starts_with("Failed to save"));
    }
}
