//! Catalog validation module.
//!
//! Checks a [`TranslationCatalog`] against its canonical language: every
//! canonical key must carry a non-empty value, and every other language is
//! compared key by key so untranslated or stray entries surface before they
//! reach the page as raw keys.

use crate::i18n::{Language, TranslationCatalog};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    /// Defects in the canonical dictionary (the fallback source)
    pub errors: Vec<String>,

    /// Gaps or inconsistencies in the other languages
    pub warnings: Vec<String>,
}

impl CatalogReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for CatalogReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every language in the catalog against the canonical one.
    pub fn validate(catalog: &TranslationCatalog) -> CatalogReport {
        let mut report = CatalogReport::new();
        let canonical = Language::DEFAULT;
        let canonical_keys = catalog.keys(canonical);

        if canonical_keys.is_empty() {
            report
                .errors
                .push(format!("Canonical language '{}' has no entries", canonical));
            return report;
        }

        for key in &canonical_keys {
            if catalog
                .lookup(canonical, key)
                .is_some_and(|value| value.trim().is_empty())
            {
                report
                    .errors
                    .push(format!("Empty value for '{}' in '{}'", key, canonical));
            }
        }

        for language in Language::ALL.into_iter().filter(|l| *l != canonical) {
            Self::compare(catalog, canonical, language, &canonical_keys, &mut report);
        }

        report
    }

    fn compare(
        catalog: &TranslationCatalog,
        canonical: Language,
        language: Language,
        canonical_keys: &[&'static str],
        report: &mut CatalogReport,
    ) {
        let keys = catalog.keys(language);

        for key in canonical_keys {
            match catalog.lookup(language, key) {
                None => report
                    .warnings
                    .push(format!("Missing key '{}' in '{}'", key, language)),
                Some(value) if value.trim().is_empty() => report
                    .warnings
                    .push(format!("Empty value for '{}' in '{}'", key, language)),
                Some(value) => {
                    let expected = catalog
                        .lookup(canonical, key)
                        .map(Self::extract_placeholders)
                        .unwrap_or_default();
                    let found = Self::extract_placeholders(value);
                    if expected != found {
                        report.warnings.push(format!(
                            "Placeholder mismatch for '{}' in '{}': expected {:?}, found {:?}",
                            key, language, expected, found
                        ));
                    }
                }
            }
        }

        for key in keys {
            if !canonical_keys.contains(&key) {
                report.warnings.push(format!(
                    "Key '{}' in '{}' has no canonical entry",
                    key, language
                ));
            }
        }
    }

    /// Extract `{name}` placeholders from a value
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
