//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`IGNORER_` prefix, `__` for nesting, e.g.
//!    `IGNORER_OUTPUT__NO_COLOR=true`)
//! 3. Config file (`--config <FILE>`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Template settings.
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Templates added to every generation (e.g. always include `macos`).
    #[serde(default)]
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory of user `*.gitignore` templates.
    /// `$IGNORER_TEMPLATES_DIR` overrides this.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// A `--config` path that does not exist is an error; the default config
    /// file location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.clone()).required(true)),
            None => builder.add_source(File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("IGNORER")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ignorer.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ignorer", "ignorer")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ignorer.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.templates.is_empty());
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.directory.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
templates = ["macos"]

[output]
no_color = true

[templates]
directory = "/home/me/templates"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.templates, vec!["macos"]);
        assert!(cfg.output.no_color);
        assert_eq!(
            cfg.templates.directory.as_deref(),
            Some(std::path::Path::new("/home/me/templates"))
        );
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
