//! Translation metrics and observability module.
//!
//! Counts lookups, fallback-to-key resolutions and language switches so
//! missing translations show up as numbers for content authors instead of
//! only as raw keys on the page.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one locale manager.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of `translate` calls
    lookups: AtomicUsize,

    /// Number of lookups that fell back to the key itself
    fallbacks: AtomicUsize,

    /// Number of accepted `change_language` calls
    language_changes: AtomicUsize,

    /// Number of `change_language` calls rejected as unsupported
    rejected_changes: AtomicUsize,
}

impl TranslationMetrics {
    /// Create a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a translation lookup.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to its key.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted language change.
    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected language change.
    pub fn record_rejected_change(&self) {
        self.rejected_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn rejected_changes(&self) -> usize {
        self.rejected_changes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallbacks,
            fallback_rate,
            language_changes: self.language_changes(),
            rejected_changes: self.rejected_changes(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.language_changes.store(0, Ordering::Relaxed);
        self.rejected_changes.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups
    pub lookups: usize,

    /// Number of lookups resolved by falling back to the key
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Number of accepted language changes
    pub language_changes: usize,

    /// Number of rejected language changes
    pub rejected_changes: usize,
}
