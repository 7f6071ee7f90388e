//! Locale manager: current language, persistence, detection and the
//! document flags every section depends on.
//!
//! There is exactly one writer of the current language, [`LocaleManager::change_language`].
//! Sections share the manager as a [`SharedLocale`] and call
//! [`LocaleManager::translate`] for every label, so a lookup always sees the
//! most recently committed language.

use crate::document::DocumentFlags;
use crate::i18n::{
    Direction, Language, TranslationCatalog, TranslationMetrics, UnsupportedLanguage,
    LANGUAGE_CLASS_PREFIX,
};
use crate::store::PreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{info, warn};

/// Key of the persisted language choice.
pub const PREFERENCE_KEY: &str = "language";

/// Environment variables consulted for the language signal, in priority order.
const ENVIRONMENT_VARIABLES: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale manager shared by every section on the single UI thread.
pub type SharedLocale = Rc<RefCell<LocaleManager>>;

/// Current locale. Direction is derived from the language, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    current: Language,
}

impl LocaleState {
    pub fn language(&self) -> Language {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.current.direction()
    }
}

/// Where the starting language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Persisted,
    Environment,
    Default,
}

/// Pick the starting language: persisted choice, then environment, then default.
pub fn resolve_initial_language(
    persisted: Option<&str>,
    environment: Option<&str>,
) -> (Language, LocaleSource) {
    if let Some(language) = persisted.and_then(|code| Language::from_code(code).ok()) {
        return (language, LocaleSource::Persisted);
    }

    if let Some(language) = environment.and_then(Language::from_tag) {
        return (language, LocaleSource::Environment);
    }

    (Language::DEFAULT, LocaleSource::Default)
}

/// Read the process's reported language preference.
///
/// `LANGUAGE` may hold a colon-separated priority list; only its first entry
/// is used. The `C` and `POSIX` locales carry no language.
pub fn detect_environment_language() -> Option<String> {
    ENVIRONMENT_VARIABLES.iter().find_map(|name| {
        let value = std::env::var(name).ok()?;
        let first = value.split(':').next()?.trim();
        match first {
            "" | "C" | "POSIX" => None,
            tag => Some(tag.to_string()),
        }
    })
}

pub struct LocaleManager {
    catalog: Arc<TranslationCatalog>,
    store: Box<dyn PreferenceStore>,
    document: Box<dyn DocumentFlags>,
    metrics: Arc<TranslationMetrics>,
    state: LocaleState,
    source: LocaleSource,
}

impl LocaleManager {
    /// Determine the starting language and apply its document flags.
    ///
    /// The store is read once here. A read failure is logged and treated as
    /// "nothing persisted". Initialization never writes the store.
    pub fn initialize(
        catalog: Arc<TranslationCatalog>,
        store: Box<dyn PreferenceStore>,
        document: Box<dyn DocumentFlags>,
        environment_language: Option<&str>,
    ) -> Self {
        let persisted = match store.get(PREFERENCE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read persisted language: {}", e);
                None
            }
        };

        let (language, source) =
            resolve_initial_language(persisted.as_deref(), environment_language);

        info!(
            "Initial language: {} ({:?})",
            language.code(),
            source
        );

        let manager = Self {
            catalog,
            store,
            document,
            metrics: Arc::new(TranslationMetrics::new()),
            state: LocaleState { current: language },
            source,
        };
        manager.apply_document_flags();
        manager
    }

    /// Wrap the manager for shared access from sections.
    pub fn into_shared(self) -> SharedLocale {
        Rc::new(RefCell::new(self))
    }

    /// Switch to the language named by `code`.
    ///
    /// Unsupported codes are rejected without touching state or the store.
    pub fn change_language(&mut self, code: &str) -> Result<Language, UnsupportedLanguage> {
        match Language::from_code(code) {
            Ok(language) => {
                self.set_language(language);
                Ok(language)
            }
            Err(e) => {
                self.metrics.record_rejected_change();
                warn!("Rejected language change: {}", e);
                Err(e)
            }
        }
    }

    /// Switch to an already-validated language.
    ///
    /// Repeating the active language repeats the writes; observable state
    /// stays the same.
    pub fn set_language(&mut self, language: Language) {
        self.state.current = language;

        if let Err(e) = self.store.set(PREFERENCE_KEY, language.code()) {
            // The in-process choice still applies for this session
            warn!("Could not persist language {}: {}", language.code(), e);
        }

        self.apply_document_flags();
        self.metrics.record_language_change();
        info!("Language changed to {} ({})", language.name(), language.code());
    }

    /// Resolve a display string, falling back to the key itself.
    ///
    /// Empty values count as missing.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.metrics.record_lookup();
        let language = self.state.current;

        match self.catalog.lookup(language, key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                self.metrics.record_fallback();
                warn!("Missing translation for '{}' in '{}'", key, language.code());
                key
            }
        }
    }

    pub fn language(&self) -> Language {
        self.state.current
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    pub fn state(&self) -> LocaleState {
        self.state
    }

    /// How the starting language was chosen at initialization.
    pub fn source(&self) -> LocaleSource {
        self.source
    }

    pub fn metrics(&self) -> &Arc<TranslationMetrics> {
        &self.metrics
    }

    pub fn catalog(&self) -> &Arc<TranslationCatalog> {
        &self.catalog
    }

    /// Set `dir` and swap the language class, keeping unrelated classes.
    fn apply_document_flags(&self) {
        let language = self.state.current;
        self.document.set_direction(language.direction());

        let mut tokens: Vec<String> = self
            .document
            .class_tokens()
            .into_iter()
            .filter(|token| !token.starts_with(LANGUAGE_CLASS_PREFIX))
            .collect();
        tokens.push(language.class_token());
        self.document.set_class_tokens(tokens);
    }
}

impl std::fmt::Debug for LocaleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleManager")
            .field("state", &self.state)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentRoot;
    use crate::store::{MemoryStore, StoreError};
    use serial_test::serial;

    // ==================== Helper Functions ====================

    fn manager_with(store: MemoryStore, environment: Option<&str>) -> (LocaleManager, DocumentRoot) {
        let document = DocumentRoot::with_classes(["dark"]);
        let manager = LocaleManager::initialize(
            TranslationCatalog::shared(),
            Box::new(store),
            Box::new(document.clone()),
            environment,
        );
        (manager, document)
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "prefs.json".into(),
                source: std::io::Error::other("disk gone"),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            self.get(_key).map(|_| ())
        }
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_resolve_prefers_persisted() {
        assert_eq!(
            resolve_initial_language(Some("tr"), Some("fr-FR")),
            (Language::Turkish, LocaleSource::Persisted)
        );
    }

    #[test]
    fn test_resolve_ignores_unsupported_persisted() {
        assert_eq!(
            resolve_initial_language(Some("de"), Some("es-MX")),
            (Language::Spanish, LocaleSource::Environment)
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(
            resolve_initial_language(None, Some("de-DE")),
            (Language::English, LocaleSource::Default)
        );
        assert_eq!(
            resolve_initial_language(None, None),
            (Language::English, LocaleSource::Default)
        );
    }

    #[test]
    fn test_initialize_applies_flags_without_writing() {
        let store = MemoryStore::with_value(PREFERENCE_KEY, "ar");
        let (manager, document) = manager_with(store.clone(), None);

        assert_eq!(manager.language(), Language::Arabic);
        assert_eq!(manager.source(), LocaleSource::Persisted);
        assert_eq!(document.direction(), Direction::Rtl);
        assert_eq!(document.class_name(), "dark lang-ar");
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_initialize_survives_store_failure() {
        let manager = LocaleManager::initialize(
            TranslationCatalog::shared(),
            Box::new(FailingStore),
            Box::new(DocumentRoot::new()),
            Some("fr-CA"),
        );

        assert_eq!(manager.language(), Language::French);
        assert_eq!(manager.source(), LocaleSource::Environment);
    }

    // ==================== change_language Tests ====================

    #[test]
    fn test_change_language_persists_and_sets_flags() {
        let store = MemoryStore::new();
        let (mut manager, document) = manager_with(store.clone(), None);

        let language = manager.change_language("ar").expect("Should switch");

        assert_eq!(language, Language::Arabic);
        assert_eq!(manager.language(), Language::Arabic);
        assert!(manager.is_rtl());
        assert_eq!(store.value(PREFERENCE_KEY), Some("ar".to_string()));
        assert_eq!(document.direction(), Direction::Rtl);
        assert!(document.has_class("lang-ar"));
        assert!(!document.has_class("lang-en"));
        assert!(document.has_class("dark"));
    }

    #[test]
    fn test_direction_is_rtl_only_for_arabic() {
        let (mut manager, document) = manager_with(MemoryStore::new(), None);

        for language in Language::ALL {
            manager.change_language(language.code()).unwrap();
            let expected = if language == Language::Arabic {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(manager.direction(), expected);
            assert_eq!(document.direction(), expected);
        }
    }

    #[test]
    fn test_only_one_language_class_active() {
        let (mut manager, document) = manager_with(MemoryStore::new(), None);

        for code in ["fr", "es", "tr", "ar", "en"] {
            manager.change_language(code).unwrap();
            let lang_classes: Vec<_> = document
                .class_tokens()
                .into_iter()
                .filter(|t| t.starts_with("lang-"))
                .collect();
            assert_eq!(lang_classes, vec![format!("lang-{}", code)]);
        }
    }

    #[test]
    fn test_unsupported_language_leaves_state_and_store() {
        let store = MemoryStore::with_value(PREFERENCE_KEY, "fr");
        let (mut manager, document) = manager_with(store.clone(), None);

        let result = manager.change_language("de");

        assert_eq!(result, Err(UnsupportedLanguage("de".to_string())));
        assert_eq!(manager.language(), Language::French);
        assert_eq!(store.writes(), 0);
        assert_eq!(store.value(PREFERENCE_KEY), Some("fr".to_string()));
        assert!(document.has_class("lang-fr"));
        assert_eq!(manager.metrics().rejected_changes(), 1);
    }

    #[test]
    fn test_change_to_active_language_is_idempotent() {
        let store = MemoryStore::new();
        let (mut manager, document) = manager_with(store.clone(), None);

        manager.change_language("es").unwrap();
        let before = (manager.state(), document.class_name(), document.direction());
        manager.change_language("es").unwrap();

        assert_eq!(
            (manager.state(), document.class_name(), document.direction()),
            before
        );
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_change_language_survives_store_failure() {
        let mut manager = LocaleManager::initialize(
            TranslationCatalog::shared(),
            Box::new(FailingStore),
            Box::new(DocumentRoot::new()),
            None,
        );

        assert!(manager.change_language("tr").is_ok());
        assert_eq!(manager.language(), Language::Turkish);
    }

    // ==================== translate Tests ====================

    #[test]
    fn test_translate_follows_current_language() {
        let (mut manager, _) = manager_with(MemoryStore::new(), None);

        assert_eq!(manager.translate("nav.home"), "Home");
        manager.change_language("es").unwrap();
        assert_eq!(manager.translate("nav.home"), "Inicio");
    }

    #[test]
    fn test_translate_missing_key_returns_key() {
        let (mut manager, _) = manager_with(MemoryStore::new(), None);

        for language in Language::ALL {
            manager.set_language(language);
            assert_eq!(manager.translate("nonexistent.key"), "nonexistent.key");
        }
        assert_eq!(manager.metrics().fallbacks(), Language::ALL.len());
    }

    #[test]
    fn test_translate_empty_value_falls_back() {
        static EN: &[(&str, &str)] = &[("hero.title", "")];
        let manager = LocaleManager::initialize(
            Arc::new(TranslationCatalog::from_tables([(Language::English, EN)])),
            Box::new(MemoryStore::new()),
            Box::new(DocumentRoot::new()),
            None,
        );

        assert_eq!(manager.translate("hero.title"), "hero.title");
    }

    #[test]
    fn test_every_canonical_key_resolves_in_every_language() {
        let (mut manager, _) = manager_with(MemoryStore::new(), None);
        let keys = TranslationCatalog::shared().keys(Language::DEFAULT);

        for language in Language::ALL {
            manager.change_language(language.code()).unwrap();
            for key in &keys {
                let value = manager.translate(key);
                assert!(!value.is_empty());
                assert_ne!(value, *key, "{} falls back in {}", key, language);
            }
        }
    }

    // ==================== Environment Detection Tests ====================

    fn clear_locale_env() {
        for name in ENVIRONMENT_VARIABLES {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_detect_environment_language_priority() {
        clear_locale_env();
        std::env::set_var("LANG", "es_ES.UTF-8");
        std::env::set_var("LANGUAGE", "tr:en");

        assert_eq!(detect_environment_language(), Some("tr".to_string()));
        clear_locale_env();
    }

    #[test]
    #[serial]
    fn test_detect_environment_language_skips_c_locale() {
        clear_locale_env();
        std::env::set_var("LC_ALL", "C");
        std::env::set_var("LANG", "fr_FR.UTF-8");

        assert_eq!(detect_environment_language(), Some("fr_FR.UTF-8".to_string()));
        clear_locale_env();
    }

    #[test]
    #[serial]
    fn test_detect_environment_language_none() {
        clear_locale_env();
        assert_eq!(detect_environment_language(), None);
    }
}
