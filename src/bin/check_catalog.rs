//! Catalog check binary - validates the built-in translation tables
//!
//! Usage:
//!   cargo run --bin check-catalog             # Print the report, fail on errors
//!   cargo run --bin check-catalog -- --strict # Also fail on warnings
//!
//! Exits non-zero when the canonical language has missing or empty values.

use anyhow::Result;
use portfolio_core::i18n::{LanguageRegistry, TranslationCatalog, TranslationValidator};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_core=info".parse()?),
        )
        .init();

    let strict = std::env::args().skip(1).any(|arg| arg == "--strict");
    let catalog = TranslationCatalog::shared();
    let registry = LanguageRegistry::get();

    info!(
        "Checking catalog against canonical language '{}'",
        registry.canonical().code
    );

    for config in registry.list_all() {
        println!(
            "{:<3} {:<8} {:>4} keys  ({}, {})",
            config.code,
            config.name,
            catalog.len(config.language),
            config.native_name,
            config.direction
        );
    }

    let report = TranslationValidator::validate(&catalog);

    for error in &report.errors {
        println!("error: {}", error);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    if report.is_clean() {
        println!("\nCatalog is complete.");
        return Ok(());
    }

    println!(
        "\n{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() || (strict && report.has_warnings()) {
        std::process::exit(1);
    }

    Ok(())
}
