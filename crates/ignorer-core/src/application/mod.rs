//! Application layer for Ignorer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CatalogService, GenerateOutcome, GenerateService, similar_names};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
