//! Internal domain modules for the Plume core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod clock;
pub mod codec;
pub mod error;
pub mod id;
pub mod note;
pub mod search;
pub mod storage;
pub mod store;
pub mod sync;
pub mod workspace;

#[doc(inline)]
pub use clock::{Clock, ManualClock, SystemClock};
#[doc(inline)]
pub use error::{PlumeError, Result};
#[doc(inline)]
pub use note::{Note, PLACEHOLDER_TITLE};
#[doc(inline)]
pub use search::{format_timestamp, present, preview, DEFAULT_PREVIEW_LEN};
#[doc(inline)]
pub use storage::{FileMedium, MemoryMedium, StorageMedium};
#[doc(inline)]
pub use store::NoteStore;
#[doc(inline)]
pub use sync::{Persistence, DEFAULT_STORAGE_KEY};
#[doc(inline)]
pub use workspace::{Draft, EditorState, Workspace};
