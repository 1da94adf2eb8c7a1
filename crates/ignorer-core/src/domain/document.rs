//! The rendered output: an ordered, deduplicated `.gitignore` document.
//!
//! [`IgnoreDocument`] is the value object the generate service builds after
//! resolving template names and hands to the filesystem port for writing.
//! Rendering is literal concatenation — `.gitignore` pattern text has no
//! variables to substitute.

use std::fmt;

use super::template::Template;

/// Options controlling how a document is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Append sections to an existing `.gitignore` instead of replacing it.
    pub append: bool,
}

/// An ordered collection of resolved templates ready for rendering.
///
/// ## Ordering and deduplication
///
/// Templates appear in the order the user requested them. Requesting the same
/// template twice (`ignorer go go`, or via an alias: `ignorer go golang`)
/// keeps only the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreDocument {
    templates: Vec<Template>,
}

impl IgnoreDocument {
    /// Build a document, deduplicating by canonical name while preserving
    /// first-occurrence order.
    pub fn new(templates: Vec<Template>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let templates = templates
            .into_iter()
            .filter(|t| seen.insert(t.name().to_string()))
            .collect();
        Self { templates }
    }

    /// Canonical names in render order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(Template::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Render the full document: header comment plus all sections.
    ///
    /// The header records which templates produced the file, so a later
    /// `ignorer` run (or a curious human) can see how it was generated.
    pub fn render(&self) -> String {
        self.render_dated(&chrono::Local::now().date_naive().to_string())
    }

    /// Render with an explicit date string. Split out so tests stay
    /// deterministic.
    pub fn render_dated(&self, date: &str) -> String {
        let mut out = String::new();
        out.push_str("# Generated by ignorer\n");
        out.push_str(&format!("# Templates: {}\n", self.names().join(", ")));
        out.push_str(&format!("# Date: {date}\n"));
        out.push_str(&self.body());
        out
    }

    /// Render only the template sections, without the generated header.
    ///
    /// Used by append mode: the existing file keeps whatever header it has
    /// and new sections are added below it.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for template in &self.templates {
            out.push('\n');
            out.push_str(&format!("### {} ###\n", template.name()));
            let patterns = template.patterns();
            out.push_str(patterns.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for IgnoreDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IgnoreDocument[{}]", self.names().join(", "))
    }
}
