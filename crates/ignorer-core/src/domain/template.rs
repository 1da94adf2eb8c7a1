//! Template domain aggregate.
//!
//! A [`Template`] is a named block of `.gitignore` patterns associated with a
//! language, framework, or tool ecosystem. Templates are the central concept
//! in Ignorer: the generator resolves user-supplied names against the template
//! catalog and concatenates the matching pattern blocks into one document.
//!
//! ## Design Decisions
//!
//! ### Why `TemplateSource` with `Static` vs `Owned`?
//!
//! Built-in templates ship inside the binary as compile-time string literals;
//! `TemplateSource::Static` references them without allocation. Templates
//! loaded from a user directory own their content via
//! `TemplateSource::Owned`.
//!
//! ### Why lowercase names?
//!
//! Template names are identifiers typed on the command line. Lookup is
//! case-insensitive (`ignorer GO` works), so the canonical stored form is
//! lowercase and the builder rejects anything else rather than silently
//! normalising.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

// ============================================================================
// Category
// ============================================================================

/// Grouping bucket for the `list` command.
///
/// Ordering is significant: `list` prints groups in declaration order
/// (Languages, then Frameworks, then Tools & Others).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Language,
    Framework,
    Tool,
}

impl Category {
    /// Heading printed above this group in `ignorer list`.
    ///
    /// These strings are part of the tool's observable contract — downstream
    /// packaging smoke tests grep for them.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Language => "Languages:",
            Self::Framework => "Frameworks:",
            Self::Tool => "Tools & Others:",
        }
    }

    /// All categories in display order.
    pub fn all() -> [Category; 3] {
        [Self::Language, Self::Framework, Self::Tool]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language => write!(f, "language"),
            Self::Framework => write!(f, "framework"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

// ============================================================================
// Content source
// ============================================================================

/// Source of template pattern text: either compile-time or runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal (built-in templates).
    Static(&'static str),

    /// Runtime-owned string (loaded from a user template directory).
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

// ============================================================================
// Template aggregate
// ============================================================================

/// A named, categorised block of `.gitignore` patterns.
///
/// ## Invariants (enforced by `validate()`, called from `build()`)
///
/// 1. `name` is non-empty, lowercase ASCII (`a-z`, `0-9`, `-`)
/// 2. `patterns` contains at least one non-blank line
/// 3. every alias satisfies the same charset rule as `name`
/// 4. no alias duplicates the name or another alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    category: Category,
    description: String,
    aliases: Vec<String>,
    patterns: TemplateSource,
}

impl Template {
    /// Start the builder pattern for fluent construction.
    ///
    /// # Example
    /// ```rust,ignore
    /// let template = Template::builder()
    ///     .name("go")
    ///     .category(Category::Language)
    ///     .alias("golang")
    ///     .patterns(GO_PATTERNS)
    ///     .build()?;
    /// ```
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Raw pattern text.
    pub fn patterns(&self) -> &str {
        self.patterns.as_str()
    }

    /// Case-insensitive match against the name or any alias.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    /// Validate all invariants.
    ///
    /// Store implementations should validate templates at insert time; the
    /// builder already validates at construction, so this mainly guards
    /// templates deserialised from user directories.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;

        if self.patterns.as_str().lines().all(|l| l.trim().is_empty()) {
            return Err(DomainError::EmptyTemplate {
                name: self.name.clone(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        seen.insert(self.name.as_str());
        for alias in &self.aliases {
            validate_name(alias)?;
            if !seen.insert(alias.as_str()) {
                return Err(DomainError::DuplicateAlias {
                    alias: alias.clone(),
                    name: self.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Lightweight display/serialisation view of this template.
    pub fn info(&self) -> TemplateInfo {
        TemplateInfo {
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            aliases: self.aliases.clone(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Identifier charset rule shared by names and aliases.
fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidTemplate(
            "template name cannot be empty".into(),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::InvalidTemplate(format!(
            "template name '{name}' must be lowercase ASCII (a-z, 0-9, '-')"
        )));
    }
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing templates with validation.
///
/// All fields are optional during construction, but `build()` enforces:
/// - `name` (must be set)
/// - `category` (must be set)
/// - `patterns` (must be non-blank)
#[derive(Default)]
pub struct TemplateBuilder {
    name: Option<String>,
    category: Option<Category>,
    description: String,
    aliases: Vec<String>,
    patterns: Option<TemplateSource>,
}

impl TemplateBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a single alias (accumulates).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set all aliases at once (replaces any previous aliases).
    pub fn aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn patterns(mut self, patterns: impl Into<TemplateSource>) -> Self {
        self.patterns = Some(patterns.into());
        self
    }

    /// Consume builder and construct a validated `Template`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if name/category/patterns not set
    /// - `InvalidTemplate` / `EmptyTemplate` / `DuplicateAlias` from
    ///   [`Template::validate`]
    pub fn build(self) -> Result<Template, DomainError> {
        let template = Template {
            name: self
                .name
                .ok_or(DomainError::MissingRequiredField { field: "name" })?,
            category: self
                .category
                .ok_or(DomainError::MissingRequiredField { field: "category" })?,
            description: self.description,
            aliases: self.aliases,
            patterns: self
                .patterns
                .ok_or(DomainError::MissingRequiredField { field: "patterns" })?,
        };

        template.validate()?;
        Ok(template)
    }
}

// ============================================================================
// Display DTO
// ============================================================================

/// Human-readable information about a template.
///
/// Serialisable view used by `ignorer list --format json` and the grouped
/// table output. Deliberately does not carry the pattern text — listing 30
/// templates should not serialise kilobytes of patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub aliases: Vec<String>,
}
