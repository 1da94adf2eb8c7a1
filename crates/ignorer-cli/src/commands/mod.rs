//! Command handlers.
//!
//! Each submodule implements one CLI invocation shape. Shared adapter wiring
//! lives here.

pub mod completions;
pub mod generate;
pub mod list;

use ignorer_adapters::{InMemoryStore, TemplateLoader};
use tracing::info;

use crate::{config::AppConfig, error::CliResult};

/// Build the template store: built-ins first, then user templates on top
/// (user templates shadow built-ins of the same name).
pub(crate) fn build_store(config: &AppConfig) -> CliResult<InMemoryStore> {
    let store = InMemoryStore::with_builtin()?;

    if let Some(loader) = TemplateLoader::discover(config.templates.directory.as_deref()) {
        let loaded = loader.load_into(&store)?;
        if loaded > 0 {
            info!(count = loaded, "user templates loaded");
        }
    }

    Ok(store)
}
