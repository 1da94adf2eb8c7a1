//! Driven (output) ports - implemented by infrastructure.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ignorer-adapters` implement
//! these:
//!
//! - `Filesystem`: `LocalFilesystem` (production), `MemoryFilesystem` (tests)
//! - `TemplateStore`: `InMemoryStore` (built-ins plus loaded user templates)

use std::path::Path;

use crate::domain::Template;
use crate::error::IgnorerResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Only the operations the generator actually needs: write the document,
/// check whether one already exists, and read it back for append mode.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> IgnorerResult<()>;

    /// Read a file's entire content.
    fn read_file(&self, path: &Path) -> IgnorerResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Lookup is by name or alias, case-insensitive. `insert` validates before
/// storing; inserting a template whose name collides with an existing one
/// replaces it (user templates shadow built-ins).
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Resolve a template by name or alias.
    fn resolve(&self, name: &str) -> IgnorerResult<Template>;

    /// List all templates, sorted by category then name.
    fn list(&self) -> IgnorerResult<Vec<Template>>;

    /// Insert or replace a template.
    fn insert(&self, template: Template) -> IgnorerResult<()>;
}
