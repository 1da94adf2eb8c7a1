//! Ignorer Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Ignorer
//! .gitignore generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ignorer-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, CatalogService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Store, Filesystem)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ignorer-adapters (Infrastructure)    │
//! │  (InMemoryStore, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Template, Category, IgnoreDocument)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ignorer_core::{
//!     application::GenerateService,
//!     domain::GenerateOptions,
//! };
//!
//! // Use application service (with injected adapters)
//! let service = GenerateService::new(store, filesystem);
//! service.generate(&["go", "docker"], ".", GenerateOptions::default()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, GenerateService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Category, GenerateOptions, IgnoreDocument, Template, TemplateBuilder, TemplateInfo,
        TemplateSource,
    };
    pub use crate::error::{IgnorerError, IgnorerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name the generator always writes.
pub const GITIGNORE_FILE: &str = ".gitignore";
