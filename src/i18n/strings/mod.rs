//! Display strings for every section of the portfolio, one table per language.
//!
//! Keys use dotted namespaces (`nav.home`, `contact.success`). The English
//! table is canonical: catalog validation checks every other table against it.

mod ar;
mod en;
mod es;
mod fr;
mod tr;

use crate::i18n::Language;

pub use ar::ARABIC;
pub use en::ENGLISH;
pub use es::SPANISH;
pub use fr::FRENCH;
pub use tr::TURKISH;

/// Raw key/value table for a language.
pub fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => ENGLISH,
        Language::Arabic => ARABIC,
        Language::French => FRENCH,
        Language::Spanish => SPANISH,
        Language::Turkish => TURKISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for language in Language::ALL {
            let entries = table(language);
            let unique: HashSet<_> = entries.iter().map(|(key, _)| *key).collect();
            assert_eq!(unique.len(), entries.len(), "duplicate key in {}", language);
        }
    }

    #[test]
    fn test_contact_notification_keys_present() {
        for language in Language::ALL {
            let keys: HashSet<_> = table(language).iter().map(|(key, _)| *key).collect();
            for key in [
                "contact.success",
                "contact.successMessage",
                "contact.error",
                "contact.errorMessage",
                "contact.sending",
            ] {
                assert!(keys.contains(key), "{} missing {}", language, key);
            }
        }
    }

    #[test]
    fn test_arabic_title_is_localized() {
        let title = ARABIC
            .iter()
            .find(|(key, _)| *key == "contact.title")
            .map(|(_, value)| *value);
        assert_eq!(title, Some("اتصل بي"));
    }
}
