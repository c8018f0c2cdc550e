//! File-backed key-value store: one file per key inside a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{KeyValueStore, PersistenceError};

/// Directory-backed store.
///
/// Each key maps to `<dir>/<percent-encoded key>.json`, so distinct keys
/// never share a file and no key escapes the directory. The directory is created
/// lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Atomic replace via a sibling temp file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state"));

        assert_eq!(store.get("cart").unwrap(), None);
        store.set("cart", r#"[{"quantity":1}]"#).unwrap();
        assert_eq!(
            store.get("cart").unwrap().as_deref(),
            Some(r#"[{"quantity":1}]"#)
        );

        store.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        store.delete("cart").unwrap();
    }

    #[test]
    fn test_file_store_encodes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("cart:../escape", "1").unwrap();
        assert!(dir.path().join("cart%3A..%2Fescape.json").exists());
        assert_eq!(store.get("cart:../escape").unwrap().as_deref(), Some("1"));

        store.set("cart:x", "colon").unwrap();
        store.set("cart_x", "underscore").unwrap();
        assert_eq!(store.get("cart:x").unwrap().as_deref(), Some("colon"));
        assert_eq!(store.get("cart_x").unwrap().as_deref(), Some("underscore"));
    }
}
