//! Core domain layer for Ignorer.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod document;
pub mod error;
pub mod template;

// Re-exports for convenience
pub use document::{GenerateOptions, IgnoreDocument};
pub use error::{DomainError, ErrorCategory};
pub use template::{Category, Template, TemplateBuilder, TemplateInfo, TemplateSource};

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, category: Category) -> Template {
        Template::builder()
            .name(name)
            .category(category)
            .patterns("*.tmp\n")
            .build()
            .unwrap()
    }

    // ========================================================================
    // Category Tests
    // ========================================================================

    #[test]
    fn category_headings_match_list_contract() {
        assert_eq!(Category::Language.heading(), "Languages:");
        assert_eq!(Category::Framework.heading(), "Frameworks:");
        assert_eq!(Category::Tool.heading(), "Tools & Others:");
    }

    #[test]
    fn category_ordering_languages_first() {
        let mut cats = vec![Category::Tool, Category::Language, Category::Framework];
        cats.sort();
        assert_eq!(
            cats,
            vec![Category::Language, Category::Framework, Category::Tool]
        );
    }

    // ========================================================================
    // Template Tests
    // ========================================================================

    #[test]
    fn template_builder_success() {
        let t = Template::builder()
            .name("go")
            .category(Category::Language)
            .description("Go binaries and vendored dependencies")
            .alias("golang")
            .patterns("*.exe\nvendor/\n")
            .build()
            .unwrap();

        assert_eq!(t.name(), "go");
        assert!(t.matches_name("GO"));
        assert!(t.matches_name("Golang"));
        assert!(!t.matches_name("rust"));
    }

    #[test]
    fn template_builder_rejects_empty_patterns() {
        let result = Template::builder()
            .name("go")
            .category(Category::Language)
            .patterns("   \n  ")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn template_builder_rejects_uppercase_name() {
        let result = Template::builder()
            .name("Go")
            .category(Category::Language)
            .patterns("*.exe\n")
            .build();

        assert!(matches!(result, Err(DomainError::InvalidTemplate(_))));
    }

    #[test]
    fn template_rejects_alias_equal_to_name() {
        let result = Template::builder()
            .name("go")
            .category(Category::Language)
            .alias("go")
            .patterns("*.exe\n")
            .build();

        assert!(result.is_err());
    }

    // ========================================================================
    // Document Tests
    // ========================================================================

    #[test]
    fn document_deduplicates_preserving_order() {
        let doc = IgnoreDocument::new(vec![
            template("go", Category::Language),
            template("docker", Category::Tool),
            template("go", Category::Language),
        ]);

        assert_eq!(doc.names(), vec!["go", "docker"]);
    }

    #[test]
    fn document_render_contains_all_sections() {
        let doc = IgnoreDocument::new(vec![
            template("go", Category::Language),
            template("docker", Category::Tool),
        ]);

        let rendered = doc.render_dated("2026-08-30");
        assert!(rendered.contains("# Generated by ignorer"));
        assert!(rendered.contains("# Templates: go, docker"));
        assert!(rendered.contains("### go ###"));
        assert!(rendered.contains("### docker ###"));
    }

    #[test]
    fn document_body_has_no_header() {
        let doc = IgnoreDocument::new(vec![template("go", Category::Language)]);
        let body = doc.body();
        assert!(!body.contains("# Generated by ignorer"));
        assert!(body.contains("### go ###"));
    }
}
