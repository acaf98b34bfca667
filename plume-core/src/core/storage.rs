//! The durable key/value boundary behind persistence.
//!
//! The engine never talks to a concrete medium directly; it holds a
//! [`StorageMedium`] and overwrites one well-known key with the encoded
//! collection. Two implementations ship with the crate: an in-memory map and
//! a one-file-per-key directory store.

use crate::{PlumeError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A durable string-to-string store with read and full-overwrite-write.
///
/// `get` returns `None` for absent keys; `set` replaces any prior value.
/// Implementations surface their own failures (for example a full disk) as
/// [`PlumeError`]; the engine never retries or merges.
pub trait StorageMedium {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<M: StorageMedium + ?Sized> StorageMedium for Rc<M> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// An ephemeral medium backed by a plain map. Never fails.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryMedium {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A medium that stores each key as one file under a root directory.
///
/// Keys are sanitized to file-system-safe names, so versioned keys like
/// `plume.notes.v1` map to stable file names across deployments.
#[derive(Debug)]
pub struct FileMedium {
    root: PathBuf,
}

impl FileMedium {
    /// Opens (and creates, if needed) the root directory.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::Io`] if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlumeError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_medium_absent_key_is_none() {
        let medium = MemoryMedium::new();
        assert!(medium.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_memory_medium_set_overwrites() {
        let medium = MemoryMedium::new();
        medium.set("k", "one").unwrap();
        medium.set("k", "two").unwrap();

        assert_eq!(medium.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_file_medium_persists_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let medium = FileMedium::open(dir.path()).unwrap();
            medium.set("plume.notes.v1", "[1,2,3]").unwrap();
        }

        let medium = FileMedium::open(dir.path()).unwrap();
        assert_eq!(
            medium.get("plume.notes.v1").unwrap().as_deref(),
            Some("[1,2,3]")
        );
        assert!(medium.get("plume.notes.v2").unwrap().is_none());
    }

    #[test]
    fn test_file_medium_sanitizes_hostile_keys() {
        let dir = tempdir().unwrap();
        let medium = FileMedium::open(dir.path()).unwrap();

        medium.set("../escape/attempt", "x").unwrap();
        assert_eq!(medium.get("../escape/attempt").unwrap().as_deref(), Some("x"));

        // The written file stays inside the root directory.
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rc_handle_shares_the_same_store() {
        let medium = Rc::new(MemoryMedium::new());
        let boxed: Box<dyn StorageMedium> = Box::new(Rc::clone(&medium));

        boxed.set("k", "v").unwrap();
        assert_eq!(medium.get("k").unwrap().as_deref(), Some("v"));
    }
}
