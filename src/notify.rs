//! Transient notifications ("toasts") raised by the contact form.

use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::rc::Rc;

/// Default lifetime of a notification, in seconds.
pub const DEFAULT_TTL_SECS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

/// Whether a notification created at `created_at` is still visible at `now`.
/// An expiry past the end of the calendar never arrives.
fn is_live(created_at: DateTime<Utc>, ttl: Duration, now: DateTime<Utc>) -> bool {
    created_at
        .checked_add_signed(ttl)
        .map_or(true, |expires_at| expires_at > now)
}

/// Anything that can surface a notification to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug)]
struct ToasterState {
    ttl: Duration,
    queue: Vec<Notification>,
}

/// In-memory notification queue with expiry. Clones share the queue.
#[derive(Debug, Clone)]
pub struct Toaster {
    state: Rc<RefCell<ToasterState>>,
}

impl Toaster {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Rc::new(RefCell::new(ToasterState {
                ttl,
                queue: Vec::new(),
            })),
        }
    }

    /// Queue whose notifications live for `secs` seconds.
    pub fn with_ttl_secs(secs: u32) -> Self {
        Self::new(Duration::try_seconds(i64::from(secs)).unwrap_or(Duration::MAX))
    }

    /// Notifications still visible at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let state = self.state.borrow();
        state
            .queue
            .iter()
            .filter(|n| is_live(n.created_at, state.ttl, now))
            .cloned()
            .collect()
    }

    /// Drop notifications that expired before `now`. Returns how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.state.borrow_mut();
        let ttl = state.ttl;
        let before = state.queue.len();
        state.queue.retain(|n| is_live(n.created_at, ttl, now));
        before - state.queue.len()
    }

    /// Every notification raised so far that has not been pruned.
    pub fn all(&self) -> Vec<Notification> {
        self.state.borrow().queue.clone()
    }

    pub fn latest(&self) -> Option<Notification> {
        self.state.borrow().queue.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().queue.is_empty()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::with_ttl_secs(DEFAULT_TTL_SECS)
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        self.state.borrow_mut().queue.push(notification);
    }
}
