//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Resolve requested names against the template store
//! 2. Build the deduplicated [`IgnoreDocument`]
//! 3. Write (or append) the `.gitignore` via the filesystem port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    GITIGNORE_FILE,
    application::ports::{Filesystem, TemplateStore},
    domain::{DomainError, GenerateOptions, IgnoreDocument, Template},
    error::IgnorerResult,
};

/// What a successful generation did — consumed by the CLI for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Path of the written `.gitignore`.
    pub path: PathBuf,
    /// Canonical template names, in render order.
    pub names: Vec<String>,
    /// An existing file was replaced.
    pub overwrote: bool,
    /// Sections were appended to an existing file.
    pub appended: bool,
}

/// Main generation service.
///
/// Orchestrates the resolve, render, and write workflow.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Generate a `.gitignore` in `output_dir` from the named templates.
    ///
    /// This is the main use case — the default `ignorer <template>...`
    /// invocation ends up here.
    ///
    /// Overwrite semantics: an existing `.gitignore` is replaced (a WARN
    /// event records the overwrite); with `options.append` the new sections
    /// are added below the existing content instead.
    #[instrument(skip_all, fields(templates = ?names, dir = %output_dir.as_ref().display()))]
    pub fn generate(
        &self,
        names: &[String],
        output_dir: impl AsRef<Path>,
        options: GenerateOptions,
    ) -> IgnorerResult<GenerateOutcome> {
        let document = self.render(names)?;
        let path = output_dir.as_ref().join(GITIGNORE_FILE);

        let exists = self.filesystem.exists(&path);
        let (content, appended) = if options.append && exists {
            let existing = self.filesystem.read_file(&path)?;
            let mut merged = existing.trim_end().to_string();
            merged.push('\n');
            merged.push_str(&document.body());
            (merged, true)
        } else {
            if exists {
                warn!(path = %path.display(), "overwriting existing .gitignore");
            }
            (document.render(), false)
        };

        self.filesystem.write_file(&path, &content)?;

        info!(
            path = %path.display(),
            templates = document.len(),
            appended,
            ".gitignore written"
        );

        Ok(GenerateOutcome {
            path,
            names: document.names().iter().map(|s| s.to_string()).collect(),
            overwrote: exists && !appended,
            appended,
        })
    }

    /// Resolve names and build the document without touching the filesystem.
    ///
    /// Used by `--dry-run` to print what would be written.
    pub fn render(&self, names: &[String]) -> IgnorerResult<IgnoreDocument> {
        if names.is_empty() {
            return Err(DomainError::NoTemplatesRequested.into());
        }
        Ok(IgnoreDocument::new(self.resolve_all(names)?))
    }

    /// Resolve every requested name, failing on the first unknown one.
    fn resolve_all(&self, names: &[String]) -> IgnorerResult<Vec<Template>> {
        names
            .iter()
            .map(|name| self.store.resolve(name))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::Category;

    fn go_template() -> Template {
        Template::builder()
            .name("go")
            .category(Category::Language)
            .patterns("*.exe\nvendor/\n")
            .build()
            .unwrap()
    }

    fn service_with(store: MockTemplateStore, fs: MockFilesystem) -> GenerateService {
        GenerateService::new(Box::new(store), Box::new(fs))
    }

    #[test]
    fn generate_writes_gitignore_into_output_dir() {
        let mut store = MockTemplateStore::new();
        store
            .expect_resolve()
            .withf(|name| name == "go")
            .returning(|_| Ok(go_template()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/tmp/project/.gitignore")
                    && content.contains("### go ###")
                    && content.contains("# Generated by ignorer")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = service_with(store, fs)
            .generate(&["go".into()], "/tmp/project", GenerateOptions::default())
            .unwrap();

        assert_eq!(outcome.names, vec!["go"]);
        assert!(!outcome.overwrote);
        assert!(!outcome.appended);
    }

    #[test]
    fn generate_overwrites_existing_file_by_default() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().returning(|_| Ok(go_template()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let outcome = service_with(store, fs)
            .generate(&["go".into()], ".", GenerateOptions::default())
            .unwrap();

        assert!(outcome.overwrote);
    }

    #[test]
    fn append_merges_with_existing_content() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().returning(|_| Ok(go_template()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok("# mine\n*.log\n".to_string()));
        fs.expect_write_file()
            .withf(|_, content| {
                content.starts_with("# mine\n*.log\n") && content.contains("### go ###")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = service_with(store, fs)
            .generate(&["go".into()], ".", GenerateOptions { append: true })
            .unwrap();

        assert!(outcome.appended);
        assert!(!outcome.overwrote);
    }

    #[test]
    fn empty_request_is_a_domain_error() {
        let store = MockTemplateStore::new();
        let fs = MockFilesystem::new();

        let err = service_with(store, fs)
            .generate(&[], ".", GenerateOptions::default())
            .unwrap_err();

        assert!(err.to_string().contains("No templates requested"));
    }

    #[test]
    fn unknown_template_propagates_not_found() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().returning(|name| {
            Err(DomainError::TemplateNotFound {
                name: name.to_string(),
                similar: vec!["go".into()],
            }
            .into())
        });
        let fs = MockFilesystem::new();

        let err = service_with(store, fs)
            .render(&["gooo".into()])
            .unwrap_err();

        assert!(err.to_string().contains("gooo"));
    }

    #[test]
    fn duplicate_names_collapse_to_one_section() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().returning(|_| Ok(go_template()));
        let fs = MockFilesystem::new();

        let doc = service_with(store, fs)
            .render(&["go".into(), "go".into()])
            .unwrap();

        assert_eq!(doc.len(), 1);
    }
}
