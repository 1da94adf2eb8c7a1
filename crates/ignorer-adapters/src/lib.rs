//! Infrastructure adapters for Ignorer.
//!
//! This crate implements the ports defined in `ignorer_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin;
pub mod filesystem;
pub mod loader;
pub mod store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use loader::TemplateLoader;
pub use store::InMemoryStore;
