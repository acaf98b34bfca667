//! Note identifier generation.

use uuid::Uuid;

/// Returns a fresh, globally-unique note identifier.
///
/// Backed by a v4 UUID, so no registry of past IDs is needed and collisions
/// are astronomically unlikely for the process lifetime and beyond.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
