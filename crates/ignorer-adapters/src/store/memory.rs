//! In-memory template store.
//!
//! The only store the CLI uses: it is populated once at startup from the
//! built-in catalog (plus any user template directory) and queried read-only
//! for the rest of the run. `RwLock` rather than `Mutex` because lookups
//! dominate and `insert` only happens during startup loading.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use ignorer_core::{
    application::{ApplicationError, ports::TemplateStore, similar_names},
    domain::{DomainError, Template},
    error::IgnorerResult,
};
use tracing::debug;

use crate::builtin;

/// Thread-safe in-memory template store, keyed by canonical name.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    templates: Arc<RwLock<HashMap<String, Template>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the built-in catalog.
    pub fn with_builtin() -> IgnorerResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load (or reload) the built-in catalog into this store.
    ///
    /// Built-ins never collide with each other; inserting over an existing
    /// name replaces it, which is how user templates shadow built-ins when
    /// loaded afterwards.
    pub fn load_builtin(&self) -> IgnorerResult<()> {
        for template in builtin::all_templates()? {
            self.insert(template)?;
        }
        debug!(count = self.len(), "built-in templates loaded");
        Ok(())
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn resolve(&self, name: &str) -> IgnorerResult<Template> {
        let map = self
            .templates
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Canonical names win over alias matches, so resolution stays
        // deterministic even when a template is named like another's alias.
        if let Some(template) = map.get(&name.to_ascii_lowercase()) {
            return Ok(template.clone());
        }
        if let Some(template) = map.values().find(|t| t.matches_name(name)) {
            return Ok(template.clone());
        }

        // Suggest across canonical names and aliases alike, so `ignorer
        // golang2` still points at `golang`.
        let candidates = map
            .values()
            .flat_map(|t| std::iter::once(t.name()).chain(t.aliases().iter().map(String::as_str)));

        Err(DomainError::TemplateNotFound {
            name: name.to_string(),
            similar: similar_names(name, candidates),
        }
        .into())
    }

    fn list(&self) -> IgnorerResult<Vec<Template>> {
        let map = self
            .templates
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut templates: Vec<Template> = map.values().cloned().collect();
        templates.sort_by(|a, b| {
            a.category()
                .cmp(&b.category())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(templates)
    }

    fn insert(&self, template: Template) -> IgnorerResult<()> {
        template.validate()?;

        let mut map = self
            .templates
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // An alias may not collide with another template's name or aliases;
        // otherwise resolution would depend on map iteration order. Replacing
        // a template under its own name is still allowed (shadowing).
        for alias in template.aliases() {
            let clash = map
                .values()
                .find(|existing| existing.name() != template.name() && existing.matches_name(alias));
            if let Some(existing) = clash {
                return Err(DomainError::AliasCollision {
                    alias: alias.clone(),
                    name: template.name().to_string(),
                    existing: existing.name().to_string(),
                }
                .into());
            }
        }

        map.insert(template.name().to_string(), template);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
