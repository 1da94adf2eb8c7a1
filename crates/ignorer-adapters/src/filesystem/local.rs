//! Local filesystem adapter.
//!
//! Production implementation of the `Filesystem` port, backed by `std::fs`.

use std::{fs, path::Path};

use ignorer_core::{
    application::{ApplicationError, ports::Filesystem},
    error::IgnorerResult,
};
use tracing::trace;

/// Filesystem port implementation over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, err: std::io::Error) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

impl Filesystem for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> IgnorerResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "writing file");
        fs::write(path, content).map_err(|e| map_io_error(path, e))?;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> IgnorerResult<String> {
        trace!(path = %path.display(), "reading file");
        Ok(fs::read_to_string(path).map_err(|e| map_io_error(path, e))?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
