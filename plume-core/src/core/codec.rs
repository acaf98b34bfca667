//! Conversion between the note collection and its persisted JSON form.
//!
//! The persisted blob is a JSON array of objects with fields
//! `id, title, content, createdAt, updatedAt`. Decoding is total: malformed
//! payloads yield an empty collection and malformed elements are repaired or
//! dropped individually, so a bad blob can never poison the in-memory model.

use crate::{Note, Result};
use log::warn;
use serde_json::Value;

/// Decodes a persisted blob into a note collection.
///
/// Never fails. Unparsable text or a non-array top level yields an empty
/// collection. Within the array, elements without a usable `id` are dropped;
/// wrongly-shaped fields are coerced to safe defaults: `title`/`content`
/// fall back to the empty string and missing or non-numeric timestamps fall
/// back to `now`. `updated_at` is raised to `created_at` when a hand-edited
/// blob orders them the wrong way round.
#[must_use]
pub fn decode(raw: &str, now: i64) -> Vec<Note> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("discarding unparsable note blob: {e}");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("discarding note blob: top level is not an array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| note_from_value(item, now))
        .collect()
}

/// Encodes a collection to its persisted form. Total for any well-formed
/// collection; `decode(encode(c), _) == c` holds.
pub fn encode(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

fn note_from_value(value: &Value, now: i64) -> Option<Note> {
    let obj = value.as_object()?;

    // An element without an id is not note-shaped at all; drop it.
    let id = match obj.get("id")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let content = obj
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let created_at = obj.get("createdAt").and_then(Value::as_i64).unwrap_or(now);
    let updated_at = obj
        .get("updatedAt")
        .and_then(Value::as_i64)
        .unwrap_or(now)
        .max(created_at);

    Some(Note {
        id,
        title,
        content,
        created_at,
        updated_at,
    })
}
