//! Language type: the five locales the portfolio is written in.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported display language.
///
/// Variants are declared in the same order as the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Arabic,
    French,
    Spanish,
    Turkish,
}

/// Text direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the document `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language code outside the supported set was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Arabic,
        Language::French,
        Language::Spanish,
        Language::Turkish,
    ];

    /// Language used when nothing was persisted or detected.
    pub const DEFAULT: Language = Language::English;

    /// Create a Language from an exact language code ("en", "ar", ...).
    pub fn from_code(code: &str) -> Result<Language, UnsupportedLanguage> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }

    /// Resolve a locale tag such as `en-US` or `fr_FR.UTF-8`.
    ///
    /// Only the leading 2-letter segment is consulted; it is lowercased
    /// before lookup. Returns `None` when that segment is not supported.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();

        if primary.len() != 2 {
            return None;
        }

        Language::from_code(&primary.to_ascii_lowercase()).ok()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the script direction.
    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Class token applied to the document body, e.g. `lang-ar`.
    pub fn class_token(&self) -> String {
        format!("{}{}", LANGUAGE_CLASS_PREFIX, self.code())
    }
}

/// Prefix shared by every language class token.
pub const LANGUAGE_CLASS_PREFIX: &str = "lang-";

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        for (code, expected) in [
            ("en", Language::English),
            ("ar", Language::Arabic),
            ("fr", Language::French),
            ("es", Language::Spanish),
            ("tr", Language::Turkish),
        ] {
            assert_eq!(Language::from_code(code), Ok(expected));
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert_eq!(result, Err(UnsupportedLanguage("de".to_string())));
        assert!(result.unwrap_err().to_string().contains("unsupported"));
    }

    #[test]
    fn test_from_code_is_exact() {
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("en-US").is_err());
    }

    #[test]
    fn test_from_str_matches_from_code() {
        let parsed: Language = "tr".parse().expect("Should parse");
        assert_eq!(parsed, Language::Turkish);
        assert!("xx".parse::<Language>().is_err());
    }

    // ==================== from_tag Tests ====================

    #[test]
    fn test_from_tag_with_region() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::English));
        assert_eq!(Language::from_tag("es-419"), Some(Language::Spanish));
    }

    #[test]
    fn test_from_tag_posix_locale() {
        assert_eq!(Language::from_tag("fr_FR.UTF-8"), Some(Language::French));
        assert_eq!(Language::from_tag("tr_TR"), Some(Language::Turkish));
    }

    #[test]
    fn test_from_tag_uppercase() {
        assert_eq!(Language::from_tag("AR-MA"), Some(Language::Arabic));
    }

    #[test]
    fn test_from_tag_unsupported_or_malformed() {
        assert_eq!(Language::from_tag("de-DE"), None);
        assert_eq!(Language::from_tag("C"), None);
        assert_eq!(Language::from_tag(""), None);
        assert_eq!(Language::from_tag("eng"), None);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_only_arabic_is_rtl() {
        for language in Language::ALL {
            let expected = if language == Language::Arabic {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(language.direction(), expected, "{}", language);
        }
    }

    #[test]
    fn test_default_is_canonical() {
        assert!(Language::DEFAULT.is_canonical());
        assert_eq!(Language::DEFAULT.code(), "en");
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Language::Spanish.native_name(), "Español");
        assert_eq!(Language::Turkish.native_name(), "Türkçe");
        assert_eq!(Language::French.name(), "French");
    }

    #[test]
    fn test_class_token() {
        assert_eq!(Language::Arabic.class_token(), "lang-ar");
        assert_eq!(Language::English.class_token(), "lang-en");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::French.to_string(), "fr");
        assert_eq!(Direction::Rtl.to_string(), "rtl");
    }
}
