//! Document-level presentation flags written by the locale manager.
//!
//! Styling reads two things from the page root: the `dir` attribute and a
//! single `lang-<code>` class token. The core writes them through
//! [`DocumentFlags`] and never reads them back for its own decisions.

use crate::i18n::Direction;
use std::cell::RefCell;
use std::rc::Rc;

/// Sink for the root element's direction and class list.
pub trait DocumentFlags {
    /// Set the `dir` attribute.
    fn set_direction(&self, direction: Direction);

    /// Current class tokens on the body element.
    fn class_tokens(&self) -> Vec<String>;

    /// Replace the body element's class tokens.
    fn set_class_tokens(&self, tokens: Vec<String>);
}

#[derive(Debug)]
struct DocumentState {
    direction: Direction,
    classes: Vec<String>,
}

/// In-memory document root. Clones share state.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    state: Rc<RefCell<DocumentState>>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::with_classes(Vec::<String>::new())
    }

    /// Start with pre-existing class tokens (e.g. theme classes).
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Rc::new(RefCell::new(DocumentState {
                direction: Direction::Ltr,
                classes: classes.into_iter().map(Into::into).collect(),
            })),
        }
    }

    pub fn direction(&self) -> Direction {
        self.state.borrow().direction
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == token)
    }

    /// Class attribute as it would be rendered.
    pub fn class_name(&self) -> String {
        self.state.borrow().classes.join(" ")
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFlags for DocumentRoot {
    fn set_direction(&self, direction: Direction) {
        self.state.borrow_mut().direction = direction;
    }

    fn class_tokens(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    fn set_class_tokens(&self, tokens: Vec<String>) {
        self.state.borrow_mut().classes = tokens;
    }
}
