//! The persisted note entity and title normalization rules.

use serde::{Deserialize, Serialize};

/// Title given to notes whose drafted title is empty or whitespace-only.
pub const PLACEHOLDER_TITLE: &str = "Untitled note";

/// A committed note.
///
/// Serialized field names are camelCase (`createdAt`, `updatedAt`) so the
/// persisted JSON stays readable by earlier deployments of the storage blob.
///
/// Invariants maintained by [`NoteStore`](super::store::NoteStore):
/// `id` is unique across the collection, `created_at` never changes after
/// creation, `updated_at >= created_at`, and `title` is never empty after a
/// committed save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since the Unix epoch, set once at creation.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch, bumped on every committed save.
    pub updated_at: i64,
}

/// Trims `raw` and substitutes [`PLACEHOLDER_TITLE`] when nothing remains.
///
/// Applied at commit time only; drafts may hold whitespace-only titles.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}
