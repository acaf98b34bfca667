//! Derives the presented note list from the collection and a query string.
//!
//! Everything here is a pure function of its inputs; the presented order is
//! recomputed on demand and never stored.

use crate::Note;
use chrono::{Local, TimeZone};

/// Default maximum length, in characters, of a content preview.
pub const DEFAULT_PREVIEW_LEN: usize = 140;

/// Returns the collection sorted and filtered for presentation.
///
/// Notes are ordered most-recently-updated first; ties keep their relative
/// order in `notes`. When the trimmed, case-folded `query` is non-empty, the
/// result is narrowed to notes whose case-folded title or content contains it
/// as a substring, preserving the sort order.
#[must_use]
pub fn present(notes: &[Note], query: &str) -> Vec<Note> {
    let mut sorted: Vec<Note> = notes.to_vec();
    // Stable sort: equal timestamps keep insertion order.
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sorted;
    }

    sorted
        .into_iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle)
                || n.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Produces a single-line excerpt of `content` for list rendering.
///
/// Runs of whitespace collapse to single spaces; text longer than `max_len`
/// characters is cut and terminated with an ellipsis. Empty content yields
/// the fixed string `"No content"`.
#[must_use]
pub fn preview(content: &str, max_len: usize) -> String {
    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return "No content".to_string();
    }
    if normalized.chars().count() <= max_len {
        return normalized;
    }

    let mut cut: String = normalized.chars().take(max_len.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Formats a millisecond timestamp for display in the local time zone.
///
/// Values that do not map to a representable instant render as `"—"`.
#[must_use]
pub fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).earliest() {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, content: &str, updated: i64) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: 0,
            updated_at: updated,
        }
    }

    #[test]
    fn test_present_orders_most_recent_first() {
        let notes = vec![
            note("a", "A", "", 100),
            note("b", "B", "", 300),
            note("c", "C", "", 200),
        ];

        let ordered = present(&notes, "");
        let updated: Vec<i64> = ordered.iter().map(|n| n.updated_at).collect();
        assert_eq!(updated, vec![300, 200, 100]);
    }

    #[test]
    fn test_present_ties_keep_insertion_order() {
        let notes = vec![
            note("first", "A", "", 100),
            note("second", "B", "", 100),
        ];

        let ordered = present(&notes, "");
        assert_eq!(ordered[0].id, "first");
        assert_eq!(ordered[1].id, "second");
    }

    #[test]
    fn test_present_filters_title_and_content() {
        let notes = vec![
            note("g", "Groceries", "buy milk", 100),
            note("t", "Taxes 2024", "file forms", 200),
        ];

        let by_title = present(&notes, "tax");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Taxes 2024");

        let by_content = present(&notes, "milk");
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].title, "Groceries");
    }

    #[test]
    fn test_present_query_is_trimmed_and_case_folded() {
        let notes = vec![note("g", "Groceries", "", 0)];

        assert_eq!(present(&notes, "  GROC  ").len(), 1);
        assert_eq!(present(&notes, "   ").len(), 1);
        assert!(present(&notes, "zzz").is_empty());
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("a\n\n b\t c", DEFAULT_PREVIEW_LEN), "a b c");
    }

    #[test]
    fn test_preview_of_empty_content() {
        assert_eq!(preview("", DEFAULT_PREVIEW_LEN), "No content");
        assert_eq!(preview("   \n ", DEFAULT_PREVIEW_LEN), "No content");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let long = "x".repeat(200);
        let cut = preview(&long, 10);

        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp(i64::MAX), "—");
        assert_ne!(format_timestamp(0), "—");
    }
}
