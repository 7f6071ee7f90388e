//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a fixed table indexed by [`Language`]. It carries the
//! metadata the language switcher and the document flags need: code, names,
//! text direction and which language is canonical.

use crate::i18n::language::{Direction, Language};

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "العربية")
    pub native_name: &'static str,

    /// Script direction used for the document-level `dir` attribute
    pub direction: Direction,

    /// Whether this is the canonical/default language (exactly one is)
    pub is_canonical: bool,
}

/// Registry of the five languages the portfolio is authored in.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

/// Entries are ordered like the `Language` variants so lookups can index.
static LANGUAGES: [LanguageConfig; 5] = [
    LanguageConfig {
        language: Language::English,
        code: "en",
        name: "English",
        native_name: "English",
        direction: Direction::Ltr,
        is_canonical: true,
    },
    LanguageConfig {
        language: Language::Arabic,
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        direction: Direction::Rtl,
        is_canonical: false,
    },
    LanguageConfig {
        language: Language::French,
        code: "fr",
        name: "French",
        native_name: "Français",
        direction: Direction::Ltr,
        is_canonical: false,
    },
    LanguageConfig {
        language: Language::Spanish,
        code: "es",
        name: "Spanish",
        native_name: "Español",
        direction: Direction::Ltr,
        is_canonical: false,
    },
    LanguageConfig {
        language: Language::Turkish,
        code: "tr",
        name: "Turkish",
        native_name: "Türkçe",
        direction: Direction::Ltr,
        is_canonical: false,
    },
];

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &LANGUAGES,
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; callers normalize case beforehand.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration for a language.
    pub fn config(&self, language: Language) -> &'static LanguageConfig {
        &self.languages[language as usize]
    }

    /// Get all languages, in switcher order.
    pub fn list_all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the default for new visitors and the
    /// reference dictionary every other language is validated against.
    pub fn canonical(&self) -> &'static LanguageConfig {
        self.config(Language::DEFAULT)
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}
