//! In-memory filesystem for tests.
//!
//! Lets service-level tests exercise the full generate workflow without
//! touching the disk. Kept in the library (not behind `cfg(test)`) so the CLI
//! crate's tests can use it too.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use ignorer_core::{
    application::{ApplicationError, ports::Filesystem},
    error::IgnorerResult,
};

/// Filesystem port implementation over an in-memory map.
#[derive(Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a file's content, if present. Test helper.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .ok()
            .and_then(|files| files.get(path.as_ref()).cloned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> IgnorerResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> IgnorerResult<String> {
        let files = self
            .files
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
