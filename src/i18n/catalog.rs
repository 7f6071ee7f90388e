//! Translation catalog: immutable `Language → key → string` dictionary.
//!
//! The built-in catalog is assembled once from the string tables on first
//! access and shared read-only for the rest of the process.

use crate::i18n::{strings, Language};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

type Dictionary = HashMap<&'static str, &'static str>;

/// Immutable mapping from language to a flat key→string dictionary.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    dictionaries: HashMap<Language, Dictionary>,
}

/// Built-in catalog instance (initialized lazily)
static CATALOG: OnceLock<Arc<TranslationCatalog>> = OnceLock::new();

impl TranslationCatalog {
    /// Get the built-in catalog covering all five languages.
    pub fn shared() -> Arc<TranslationCatalog> {
        CATALOG
            .get_or_init(|| {
                Arc::new(Self::from_tables(
                    Language::ALL
                        .into_iter()
                        .map(|language| (language, strings::table(language))),
                ))
            })
            .clone()
    }

    /// Build a catalog from raw key/value tables.
    ///
    /// A language may appear more than once; later entries win.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, &'static [(&'static str, &'static str)])>,
    {
        let mut dictionaries: HashMap<Language, Dictionary> = HashMap::new();
        for (language, entries) in tables {
            dictionaries
                .entry(language)
                .or_default()
                .extend(entries.iter().copied());
        }
        Self { dictionaries }
    }

    /// Look up a key in one language only (no fallback).
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .copied()
    }

    /// Check whether a language has an entry for a key.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    /// All keys defined for a language, sorted.
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .dictionaries
            .get(&language)
            .map(|dictionary| dictionary.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Number of entries defined for a language.
    pub fn len(&self, language: Language) -> usize {
        self.dictionaries
            .get(&language)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Check whether the catalog holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.values().all(HashMap::is_empty)
    }
}
