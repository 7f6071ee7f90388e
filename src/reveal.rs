//! Viewport-triggered reveal animator.
//!
//! Sections register their root element once and read back a boolean
//! "revealed" flag to pick their entrance state, instead of each section
//! running its own observer and timers. Visibility arrives as pushed
//! [`IntersectionEvent`]s; the geometry behind them is computed elsewhere.

use futures::channel::mpsc;
use futures::{Stream, StreamExt};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Delay between consecutive items of a staggered card grid.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Opaque identity of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(u64);

impl ElementHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Predicate deciding whether an element counts as revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// At least `threshold` of the element's area is inside the viewport.
    Area { threshold: f64 },
    /// The page is scrolled past `offset` pixels (e.g. navbar elevation).
    Position { offset: f64 },
}

/// Per-registration options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub trigger: Trigger,
    /// Stop monitoring after the first reveal.
    pub one_shot: bool,
}

impl ObserveOptions {
    /// Area trigger with the given threshold, one-shot.
    pub fn area(threshold: f64) -> Self {
        Self {
            trigger: Trigger::Area { threshold },
            one_shot: true,
        }
    }

    /// Scroll-position trigger, repeatable.
    pub fn position(offset: f64) -> Self {
        Self {
            trigger: Trigger::Position { offset },
            one_shot: false,
        }
    }

    /// Set whether the reveal happens once or tracks visibility.
    pub fn with_one_shot(mut self, one_shot: bool) -> Self {
        self.one_shot = one_shot;
        self
    }

    /// Preset: top-level page sections (10% visible, stays revealed)
    pub fn section() -> Self {
        Self::area(0.1)
    }

    /// Preset: project and certificate cards (20% visible, once)
    pub fn card() -> Self {
        Self::area(0.2)
    }

    /// Preset: skill badges (10% visible, once)
    pub fn skill() -> Self {
        Self::area(0.1)
    }

    /// Preset: navbar elevation once scrolled past 10px
    pub fn navbar() -> Self {
        Self::position(10.0)
    }

    fn validate(&self) -> Result<(), RevealError> {
        match self.trigger {
            Trigger::Area { threshold } if !(0.0..=1.0).contains(&threshold) => {
                Err(RevealError::InvalidThreshold(threshold))
            }
            Trigger::Position { offset } if !offset.is_finite() || offset < 0.0 => {
                Err(RevealError::InvalidOffset(offset))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::area(0.1)
    }
}

/// Observation payload pushed by the viewport source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Fraction of the element's area currently visible.
    Visible(f64),
    /// Current vertical scroll offset in pixels.
    Scrolled(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub handle: ElementHandle,
    pub signal: Signal,
}

impl IntersectionEvent {
    pub fn visible(handle: ElementHandle, fraction: f64) -> Self {
        Self {
            handle,
            signal: Signal::Visible(fraction),
        }
    }

    pub fn scrolled(handle: ElementHandle, offset: f64) -> Self {
        Self {
            handle,
            signal: Signal::Scrolled(offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("scroll offset must be finite and non-negative, got {0}")]
    InvalidOffset(f64),
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The entry consumed the event.
    Delivered { revealed: bool, changed: bool },
    /// Unknown handle, finished one-shot entry, or a signal the trigger
    /// does not use.
    Ignored,
}

#[derive(Debug)]
struct Entry {
    options: ObserveOptions,
    revealed: bool,
    monitoring: bool,
    delivered: usize,
}

impl Entry {
    fn evaluate(&self, signal: Signal) -> Option<bool> {
        match (self.options.trigger, signal) {
            (Trigger::Area { threshold }, Signal::Visible(fraction)) => {
                let fraction = if fraction.is_nan() {
                    0.0
                } else {
                    fraction.clamp(0.0, 1.0)
                };
                Some(fraction > 0.0 && fraction >= threshold)
            }
            (Trigger::Position { offset }, Signal::Scrolled(scroll)) => Some(scroll > offset),
            _ => None,
        }
    }
}

/// Registry of observed elements and their revealed flags.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    entries: HashMap<ElementHandle, Entry>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. Observing an already registered handle replaces
    /// its entry and starts it unrevealed.
    pub fn observe(
        &mut self,
        handle: ElementHandle,
        options: ObserveOptions,
    ) -> Result<(), RevealError> {
        options.validate()?;
        self.entries.insert(
            handle,
            Entry {
                options,
                revealed: false,
                monitoring: true,
                delivered: 0,
            },
        );
        debug!("Observing element {} with {:?}", handle.id(), options);
        Ok(())
    }

    /// Remove an element. Unknown handles are a no-op.
    pub fn unobserve(&mut self, handle: ElementHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    /// Apply one pushed event.
    pub fn dispatch(&mut self, event: IntersectionEvent) -> Dispatch {
        let Some(entry) = self.entries.get_mut(&event.handle) else {
            return Dispatch::Ignored;
        };
        if !entry.monitoring {
            return Dispatch::Ignored;
        }
        let Some(matches) = entry.evaluate(event.signal) else {
            return Dispatch::Ignored;
        };

        entry.delivered += 1;
        let previous = entry.revealed;

        if entry.options.one_shot {
            if matches {
                entry.revealed = true;
                entry.monitoring = false;
            }
        } else {
            entry.revealed = matches;
        }

        let changed = previous != entry.revealed;
        if changed {
            debug!(
                "Element {} {}",
                event.handle.id(),
                if entry.revealed { "revealed" } else { "hidden" }
            );
        }

        Dispatch::Delivered {
            revealed: entry.revealed,
            changed,
        }
    }

    /// Consume events until the source closes. Returns how many were delivered.
    pub async fn run<S>(&mut self, events: S) -> usize
    where
        S: Stream<Item = IntersectionEvent>,
    {
        let mut events = std::pin::pin!(events);
        let mut delivered = 0;
        while let Some(event) = events.next().await {
            if matches!(self.dispatch(event), Dispatch::Delivered { .. }) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Revealed flag for an element; unknown handles read as not revealed.
    pub fn is_revealed(&self, handle: ElementHandle) -> bool {
        self.entries
            .get(&handle)
            .map(|entry| entry.revealed)
            .unwrap_or(false)
    }

    /// Whether events for this handle are still being consumed.
    pub fn is_monitoring(&self, handle: ElementHandle) -> bool {
        self.entries
            .get(&handle)
            .map(|entry| entry.monitoring)
            .unwrap_or(false)
    }

    /// Number of events delivered to this handle's entry.
    pub fn delivered(&self, handle: ElementHandle) -> usize {
        self.entries
            .get(&handle)
            .map(|entry| entry.delivered)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bounded push channel for intersection events.
pub fn intersection_channel(
    capacity: usize,
) -> (
    mpsc::Sender<IntersectionEvent>,
    mpsc::Receiver<IntersectionEvent>,
) {
    mpsc::channel(capacity)
}

/// Transition delay for the `index`-th item of a staggered grid.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
