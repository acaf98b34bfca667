//! The canonical in-memory collection of committed notes.

use crate::core::{id, note};
use crate::{Note, PlumeError, Result};
use log::warn;

/// Owns the committed note collection.
///
/// Notes are kept in insertion order; presentation order is always derived by
/// the search pipeline from `updated_at`, never stored. The store guarantees
/// the data-model invariants: unique ids, immutable `created_at`, and a
/// non-empty title after every committed save.
///
/// The store itself does not persist anything. Callers (in practice the
/// [`Workspace`](super::workspace::Workspace)) follow every mutation with a
/// [`Persistence::flush`](super::sync::Persistence::flush).
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a hydrated collection, dropping any note whose id repeats an
    /// earlier one so the uniqueness invariant holds even for hand-edited
    /// persisted data.
    #[must_use]
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut store = Self {
            notes: Vec::with_capacity(notes.len()),
        };
        for note in notes {
            if store.get(&note.id).is_some() {
                warn!("dropping note with duplicate id {}", note.id);
            } else {
                store.notes.push(note);
            }
        }
        store
    }

    /// Creates a note and returns a copy of it. Always succeeds.
    ///
    /// `title` and `content` default to the placeholder title and the empty
    /// string; a provided title is normalized the same way a save is.
    /// `created_at` and `updated_at` are both set to `now`.
    pub fn create(&mut self, title: Option<&str>, content: Option<&str>, now: i64) -> Note {
        let note = Note {
            id: id::new_id(),
            title: note::normalize_title(title.unwrap_or_default()),
            content: content.unwrap_or_default().to_string(),
            created_at: now,
            updated_at: now,
        };
        self.notes.push(note.clone());
        note
    }

    /// Commits new `title` and `content` to the note identified by `id`.
    ///
    /// The title is trimmed and falls back to the placeholder when empty; the
    /// content is stored verbatim. `updated_at` becomes `now`; `created_at`
    /// is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::NoteNotFound`] if no note has this id.
    pub fn update(&mut self, id: &str, title: &str, content: &str, now: i64) -> Result<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| PlumeError::NoteNotFound(id.to_string()))?;

        note.title = note::normalize_title(title);
        note.content = content.to_string();
        note.updated_at = now;
        Ok(note.clone())
    }

    /// Removes the note if present; reports whether a removal occurred.
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Looks up a single note by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// A read-only snapshot of the collection in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
