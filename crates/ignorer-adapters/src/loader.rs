//! User template directory loader.
//!
//! Users can carry their own templates in a directory of `*.gitignore` files:
//!
//! ```text
//! ~/.config/ignorer/templates/
//! ├── ignorer.toml        # optional metadata manifest
//! ├── terraform.gitignore
//! └── unity.gitignore
//! ```
//!
//! The file stem is the template name. An optional `ignorer.toml` manifest
//! supplies per-template metadata:
//!
//! ```toml
//! [templates.terraform]
//! category = "tool"
//! description = "Terraform state and plan files"
//! aliases = ["tf"]
//! ```
//!
//! Templates without a manifest entry default to the Tools & Others category.
//! User templates shadow built-ins of the same name. Invalid entries are
//! skipped with a warning rather than failing the whole run, so one broken
//! file never takes the CLI down.
//!
//! The directory is taken from `$IGNORER_TEMPLATES_DIR`, falling back to the
//! configured path.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use ignorer_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Category, Template},
    error::IgnorerResult,
};
use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Environment variable overriding the user template directory.
pub const TEMPLATES_DIR_ENV: &str = "IGNORER_TEMPLATES_DIR";

/// File extension a user template file must carry.
const TEMPLATE_EXTENSION: &str = "gitignore";

/// Manifest file name inside the template directory.
const MANIFEST_FILE: &str = "ignorer.toml";

/// Loads user templates from a directory into a [`TemplateStore`].
pub struct TemplateLoader {
    root: PathBuf,
}

/// `ignorer.toml` layout.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    templates: HashMap<String, ManifestEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestEntry {
    category: Option<String>,
    description: Option<String>,
    #[serde(default)]
    aliases: Vec<String>,
}

impl TemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the user template directory, if any.
    ///
    /// `$IGNORER_TEMPLATES_DIR` wins over the configured path. A configured
    /// path that does not exist is silently ignored (nothing to load); an
    /// explicit env var pointing nowhere is still returned so the failure
    /// surfaces in `load_into`.
    pub fn discover(configured: Option<&Path>) -> Option<Self> {
        if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
            if !dir.is_empty() {
                return Some(Self::new(dir));
            }
        }
        configured
            .filter(|path| path.is_dir())
            .map(Self::new)
    }

    /// Load every template file under the directory into `store`.
    ///
    /// Returns the number of templates loaded. Individual invalid files are
    /// skipped with a WARN event; only a missing or unreadable directory is
    /// an error.
    pub fn load_into(&self, store: &dyn TemplateStore) -> IgnorerResult<usize> {
        if !self.root.is_dir() {
            return Err(ApplicationError::LoadFailed {
                reason: format!("'{}' is not a directory", self.root.display()),
            }
            .into());
        }

        let manifest = self.read_manifest();
        let mut loaded = 0;

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }

            match self.load_template(path, &manifest) {
                Ok(template) => {
                    debug!(name = template.name(), path = %path.display(), "user template loaded");
                    // A rejected insert (e.g. an alias colliding with another
                    // template) skips this file, like any other invalid entry.
                    match store.insert(template) {
                        Ok(()) => loaded += 1,
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "skipping conflicting template");
                        }
                    }
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping invalid template file");
                }
            }
        }

        debug!(count = loaded, dir = %self.root.display(), "user templates loaded");
        Ok(loaded)
    }

    /// Parse the manifest if present; a broken manifest degrades to defaults.
    fn read_manifest(&self) -> Manifest {
        let path = self.root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Manifest::default();
        }

        match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| toml::from_str::<Manifest>(&text).map_err(|e| e.to_string()))
        {
            Ok(manifest) => manifest,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable manifest");
                Manifest::default()
            }
        }
    }

    fn load_template(&self, path: &Path, manifest: &Manifest) -> IgnorerResult<Template> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| ApplicationError::LoadFailed {
                reason: format!("'{}' has no usable file name", path.display()),
            })?;

        let patterns =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let entry = manifest.templates.get(&name);
        let category = entry
            .and_then(|e| e.category.as_deref())
            .map(parse_category)
            .transpose()?
            .unwrap_or(Category::Tool);

        let mut builder = Template::builder()
            .name(name)
            .category(category)
            .patterns(patterns);
        if let Some(entry) = entry {
            if let Some(description) = &entry.description {
                builder = builder.description(description);
            }
            builder = builder.aliases(entry.aliases.clone());
        }

        Ok(builder.build()?)
    }
}

fn parse_category(value: &str) -> IgnorerResult<Category> {
    match value.to_ascii_lowercase().as_str() {
        "language" => Ok(Category::Language),
        "framework" => Ok(Category::Framework),
        "tool" => Ok(Category::Tool),
        other => Err(ApplicationError::LoadFailed {
            reason: format!("unknown category '{other}' (expected language, framework, or tool)"),
        }
        .into()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
