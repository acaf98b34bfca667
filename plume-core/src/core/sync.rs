//! Mirrors the note collection to the durable medium.
//!
//! The original design kept persistence as an implicit reactive side effect;
//! here it is an explicit contract: the workspace calls [`Persistence::flush`]
//! after every mutation, and [`Persistence::hydrate`] once at startup. One
//! mutation means exactly one attempted full overwrite of the storage key.

use crate::core::codec;
use crate::{Note, Result, StorageMedium};
use log::{debug, warn};

/// Default, versioned key for the persisted note blob. Stable across
/// deployments; changing the persisted shape means bumping the version
/// suffix or teaching the codec a migration.
pub const DEFAULT_STORAGE_KEY: &str = "plume.notes.v1";

/// Reads and writes the encoded collection at a fixed storage key.
pub struct Persistence {
    medium: Box<dyn StorageMedium>,
    key: String,
}

impl Persistence {
    pub fn new(medium: Box<dyn StorageMedium>, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
        }
    }

    /// Loads the persisted collection.
    ///
    /// Never fails: an absent key means no notes, and both medium read errors
    /// and undecodable payloads are logged and recovered as an empty
    /// collection. `now` backfills timestamps the codec cannot salvage.
    #[must_use]
    pub fn hydrate(&self, now: i64) -> Vec<Note> {
        let raw = match self.medium.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted notes under key {}", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("failed to read persisted notes, starting empty: {e}");
                return Vec::new();
            }
        };

        let notes = codec::decode(&raw, now);
        debug!("hydrated {} notes from key {}", notes.len(), self.key);
        notes
    }

    /// Encodes `notes` and fully overwrites the prior value at the key.
    ///
    /// # Errors
    ///
    /// Surfaces medium write failures to the caller. The in-memory collection
    /// stays authoritative either way; nothing is rolled back.
    pub fn flush(&self, notes: &[Note]) -> Result<()> {
        let payload = codec::encode(notes)?;
        self.medium.set(&self.key, &payload)?;
        debug!("flushed {} notes to key {}", notes.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryMedium, PlumeError};
    use std::rc::Rc;

    /// A medium whose writes always fail, standing in for a full disk.
    struct FailingMedium;

    impl StorageMedium for FailingMedium {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(PlumeError::Storage("quota exceeded".to_string()))
        }
    }

    fn note(id: &str, updated: i64) -> Note {
        Note {
            id: id.to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            created_at: updated,
            updated_at: updated,
        }
    }

    #[test]
    fn test_hydrate_empty_medium_yields_no_notes() {
        let persistence = Persistence::new(Box::new(MemoryMedium::new()), DEFAULT_STORAGE_KEY);
        assert!(persistence.hydrate(0).is_empty());
    }

    #[test]
    fn test_hydrate_corrupt_blob_yields_no_notes() {
        let medium = MemoryMedium::new();
        medium.set(DEFAULT_STORAGE_KEY, "{{{{").unwrap();

        let persistence = Persistence::new(Box::new(medium), DEFAULT_STORAGE_KEY);
        assert!(persistence.hydrate(0).is_empty());
    }

    #[test]
    fn test_flush_then_hydrate_round_trips() {
        let medium = Rc::new(MemoryMedium::new());
        let persistence = Persistence::new(Box::new(Rc::clone(&medium)), "k");

        let notes = vec![note("a", 100), note("b", 200)];
        persistence.flush(&notes).unwrap();

        assert_eq!(persistence.hydrate(999), notes);
        assert!(medium.get("k").unwrap().is_some());
    }

    #[test]
    fn test_flush_surfaces_write_failure() {
        let persistence = Persistence::new(Box::new(FailingMedium), "k");
        let result = persistence.flush(&[note("a", 1)]);

        assert!(matches!(result, Err(PlumeError::Storage(_))));
    }
}
