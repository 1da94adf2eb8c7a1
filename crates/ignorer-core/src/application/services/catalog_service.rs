//! Catalog Service - template listing and lookup.
//!
//! Handles the read-only catalog queries behind `ignorer list`.
//! Separated from GenerateService for single responsibility.

use crate::{
    application::ports::TemplateStore,
    domain::{Category, Template, TemplateInfo},
    error::IgnorerResult,
};

/// Service for catalog queries.
pub struct CatalogService {
    store: Box<dyn TemplateStore>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Resolve a template by name or alias.
    pub fn resolve(&self, name: &str) -> IgnorerResult<Template> {
        self.store.resolve(name)
    }

    /// List all templates, sorted by category then name.
    pub fn list(&self) -> IgnorerResult<Vec<TemplateInfo>> {
        Ok(self.store.list()?.iter().map(Template::info).collect())
    }

    /// List templates grouped by category, in display order.
    ///
    /// Empty categories are omitted — `list` never prints a heading with
    /// nothing under it.
    pub fn grouped(&self) -> IgnorerResult<Vec<(Category, Vec<TemplateInfo>)>> {
        let all = self.list()?;

        Ok(Category::all()
            .into_iter()
            .filter_map(|category| {
                let group: Vec<_> = all
                    .iter()
                    .filter(|t| t.category == category)
                    .cloned()
                    .collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect())
    }
}

// ── Name similarity ───────────────────────────────────────────────────────────

/// Rank `candidates` by closeness to `query` for "did you mean" suggestions.
///
/// A candidate qualifies when the query is a prefix of it, or when the edit
/// distance is at most 2. At most three suggestions are returned, closest
/// first. Case-insensitive.
pub fn similar_names<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let query = query.to_ascii_lowercase();

    let mut scored: Vec<(usize, String)> = candidates
        .filter_map(|candidate| {
            let lower = candidate.to_ascii_lowercase();
            if lower.starts_with(&query) {
                return Some((0, candidate.to_string()));
            }
            let distance = levenshtein(&query, &lower);
            (distance <= 2).then(|| (distance, candidate.to_string()))
        })
        .collect();

    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored.into_iter().take(3).map(|(_, name)| name).collect()
}

/// Classic two-row Levenshtein. Inputs are short template names, so the
/// quadratic cost is irrelevant.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
