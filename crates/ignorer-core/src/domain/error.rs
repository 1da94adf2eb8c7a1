//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{name}' has no patterns")]
    EmptyTemplate { name: String },

    #[error("Alias '{alias}' duplicates the name or another alias of '{name}'")]
    DuplicateAlias { alias: String, name: String },

    #[error("Alias '{alias}' of template '{name}' collides with existing template '{existing}'")]
    AliasCollision {
        alias: String,
        name: String,
        existing: String,
    },

    #[error("No templates requested")]
    NoTemplatesRequested,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown template '{name}'")]
    TemplateNotFound {
        name: String,
        /// Closest known names, best match first. May be empty.
        similar: Vec<String>,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, similar } => {
                let mut out = vec![format!("No template is named '{name}'")];
                if !similar.is_empty() {
                    out.push(format!("Did you mean: {}?", similar.join(", ")));
                }
                out.push("Run 'ignorer list' to see all available templates".into());
                out
            }
            Self::NoTemplatesRequested => vec![
                "Name at least one template, e.g.: ignorer go docker".into(),
                "Run 'ignorer list' to see all available templates".into(),
            ],
            Self::EmptyTemplate { name } => vec![
                format!("Template '{name}' contains no patterns"),
                "If this is a user template, check its .gitignore file is not empty".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicateAlias { .. }
            | Self::AliasCollision { .. }
            | Self::NoTemplatesRequested => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
