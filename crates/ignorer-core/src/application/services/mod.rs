//! Application services (use case orchestration).

pub mod catalog_service;
pub mod generate_service;

pub use catalog_service::{CatalogService, similar_names};
pub use generate_service::{GenerateOutcome, GenerateService};
