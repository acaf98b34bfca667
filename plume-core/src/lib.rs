//! Core library for Plume — a lightweight, local-first note-taking engine.
//!
//! The primary entry point is [`Workspace`], which owns the committed note
//! collection, the current selection, and the pending draft. All mutations go
//! through `Workspace` methods; every mutation is mirrored to an injected
//! [`StorageMedium`] so the durable copy tracks the in-memory collection.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    clock::{Clock, ManualClock, SystemClock},
    error::{PlumeError, Result},
    id::new_id,
    note::{Note, PLACEHOLDER_TITLE},
    search::{format_timestamp, present, preview, DEFAULT_PREVIEW_LEN},
    storage::{FileMedium, MemoryMedium, StorageMedium},
    store::NoteStore,
    sync::{Persistence, DEFAULT_STORAGE_KEY},
    workspace::{Draft, EditorState, Workspace},
};
