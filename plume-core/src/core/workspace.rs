//! High-level workspace operations over the note collection.

use crate::core::search;
use crate::{Clock, Note, NoteStore, Persistence, Result, StorageMedium};

/// The editor's relationship between the pending draft and the committed note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No note is selected; there is no draft.
    NoSelection,
    /// The draft equals the committed note field-for-field.
    Clean,
    /// The draft differs from the committed note in title or content.
    Dirty,
}

/// A transient, unsaved copy of the selected note's editable fields.
///
/// Exists only while a note is selected, and is never persisted. It is
/// recreated from the committed note on selection change, on discard, and
/// after every successful save; commits are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    fn of(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// An open Plume workspace.
///
/// `Workspace` is the primary interface for all mutations. It owns the
/// committed [`NoteStore`], the [`Persistence`] mirror, the injected
/// [`Clock`], the current selection, the pending [`Draft`], and the search
/// query. There is exactly one mutator at a time by construction, so every
/// mutation is followed synchronously by one flush, in mutation order.
///
/// A flush failure is returned to the caller; the in-memory collection is
/// never rolled back and remains the source of truth.
pub struct Workspace {
    store: NoteStore,
    persistence: Persistence,
    clock: Box<dyn Clock>,
    selected_id: Option<String>,
    draft: Option<Draft>,
    query: String,
}

impl Workspace {
    /// Opens a workspace over `medium`, hydrating the collection persisted
    /// under `storage_key` and selecting the most recently updated note (or
    /// nothing when the collection is empty).
    ///
    /// Never fails: unreadable or corrupt persisted data is recovered as an
    /// empty collection.
    pub fn open(
        medium: Box<dyn StorageMedium>,
        clock: Box<dyn Clock>,
        storage_key: impl Into<String>,
    ) -> Self {
        let persistence = Persistence::new(medium, storage_key);
        let now = clock.now_ms();
        let store = NoteStore::from_notes(persistence.hydrate(now));

        let mut workspace = Self {
            store,
            persistence,
            clock,
            selected_id: None,
            draft: None,
            query: String::new(),
        };
        let first = workspace.first_presented_id();
        workspace.select(first.as_deref());
        workspace
    }

    /// Creates a new note, selects it, and clears the search query so the
    /// fresh note is visible in the list.
    ///
    /// # Errors
    ///
    /// Surfaces a flush failure from the durable medium. The note exists in
    /// memory regardless.
    pub fn create(&mut self) -> Result<Note> {
        let now = self.clock.now_ms();
        let note = self.store.create(None, None, now);

        self.selected_id = Some(note.id.clone());
        self.draft = Some(Draft::of(&note));
        self.query.clear();

        self.persistence.flush(self.store.list())?;
        Ok(note)
    }

    /// Moves the selection, replacing the draft with a fresh copy of the
    /// target note's fields.
    ///
    /// `None` or an unknown id clears the selection. Any unsaved prior draft
    /// is discarded without confirmation; prompting is the caller's job.
    pub fn select(&mut self, id: Option<&str>) {
        match id.and_then(|id| self.store.get(id)).cloned() {
            Some(note) => {
                self.draft = Some(Draft::of(&note));
                self.selected_id = Some(note.id);
            }
            None => {
                self.selected_id = None;
                self.draft = None;
            }
        }
    }

    /// Replaces the draft title. No-op when nothing is selected.
    ///
    /// Whitespace-only titles are accepted here; normalization happens at
    /// save time only.
    pub fn edit_title(&mut self, text: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = text.to_string();
        }
    }

    /// Replaces the draft content. No-op when nothing is selected.
    pub fn edit_content(&mut self, text: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = text.to_string();
        }
    }

    /// Commits the draft into the note store and flushes.
    ///
    /// No-op unless the editor is [`EditorState::Dirty`]. The title is
    /// normalized on commit, `updated_at` is taken from the injected clock,
    /// and the draft is reset from the freshly committed note.
    ///
    /// # Errors
    ///
    /// Surfaces a flush failure; the commit itself has already happened in
    /// memory at that point.
    pub fn save(&mut self) -> Result<()> {
        if self.editor_state() != EditorState::Dirty {
            return Ok(());
        }
        let (Some(id), Some(draft)) = (self.selected_id.clone(), self.draft.clone()) else {
            return Ok(());
        };

        let now = self.clock.now_ms();
        let committed = self.store.update(&id, &draft.title, &draft.content, now)?;
        self.draft = Some(Draft::of(&committed));

        self.persistence.flush(self.store.list())
    }

    /// Throws away the pending edits, resetting the draft from the committed
    /// note. No-op from Clean or NoSelection.
    pub fn discard(&mut self) {
        if let Some(note) = self.selected_note().cloned() {
            self.draft = Some(Draft::of(&note));
        }
    }

    /// Removes a note; reports whether a removal occurred. Idempotent.
    ///
    /// Deleting the selected note moves the selection to the first note in
    /// presentation order, or clears it when the collection is now empty.
    /// No confirmation is performed here; see [`Workspace::delete_with_confirm`].
    ///
    /// # Errors
    ///
    /// Surfaces a flush failure after an actual removal. A no-op delete does
    /// not touch the durable medium.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.store.delete(id) {
            return Ok(false);
        }

        if self.selected_id.as_deref() == Some(id) {
            let next = self.first_presented_id();
            self.select(next.as_deref());
        }

        self.persistence.flush(self.store.list())?;
        Ok(true)
    }

    /// Asks `confirm` before deleting, passing a message that names the note.
    ///
    /// Returns `Ok(false)` without touching anything when the confirmation is
    /// declined or the id is unknown.
    pub fn delete_with_confirm<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        let message = match self.store.get(id) {
            Some(note) if !note.title.trim().is_empty() => {
                format!("Delete “{}”? This cannot be undone.", note.title.trim())
            }
            Some(_) => "Delete this note? This cannot be undone.".to_string(),
            None => return Ok(false),
        };

        if !confirm(&message) {
            return Ok(false);
        }
        self.delete(id)
    }

    /// The committed collection in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.store.list()
    }

    /// The collection filtered by the current query and sorted
    /// most-recently-updated first.
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        search::present(self.store.list(), &self.query)
    }

    /// The committed note behind the current selection, if any.
    #[must_use]
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    /// The pending draft, if a note is selected.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Computes the editor state by comparing the draft to the committed note.
    #[must_use]
    pub fn editor_state(&self) -> EditorState {
        let (Some(id), Some(draft)) = (self.selected_id.as_deref(), self.draft.as_ref()) else {
            return EditorState::NoSelection;
        };
        match self.store.get(id) {
            Some(note) if draft.title == note.title && draft.content == note.content => {
                EditorState::Clean
            }
            Some(_) => EditorState::Dirty,
            None => EditorState::NoSelection,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    fn first_presented_id(&self) -> Option<String> {
        search::present(self.store.list(), "")
            .first()
            .map(|n| n.id.clone())
    }
}
