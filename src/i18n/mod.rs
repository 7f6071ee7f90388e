//! Internationalization (i18n) module for the five portfolio languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: The `Language` enum, text direction and code parsing
//! - `strings`: Per-language display string tables
//! - `catalog`: Immutable `Language → key → string` dictionary built from the tables
//! - `validator`: Catalog completeness checks against the canonical language
//! - `metrics`: Lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_core::i18n::{Language, TranslationCatalog};
//!
//! let arabic = Language::from_code("ar")?;
//! let catalog = TranslationCatalog::shared();
//! let title = catalog.lookup(arabic, "contact.title");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
pub mod strings;
mod validator;

pub use catalog::TranslationCatalog;
pub use language::{Direction, Language, UnsupportedLanguage, LANGUAGE_CLASS_PREFIX};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogReport, TranslationValidator};
