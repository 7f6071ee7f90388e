//! Contact form values and local validation.
//!
//! Validation is synchronous and runs before any network call. It reports
//! every failing field at once so the page can show each message inline.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum name length, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Translation key of the inline error shown under this field.
    pub fn error_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.validation.name",
            Field::Email => "contact.validation.email",
            Field::Message => "contact.validation.message",
        }
    }

    /// Translation key of the field label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.name",
            Field::Email => "contact.email",
            Field::Message => "contact.message",
        }
    }

    /// Translation key of the field placeholder.
    pub fn placeholder_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.namePlaceholder",
            Field::Email => "contact.emailPlaceholder",
            Field::Message => "contact.messagePlaceholder",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
    EmailFormat,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(min) => write!(f, "must be at least {} characters", min),
            Rule::EmailFormat => f.write_str("must be a valid email address"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {rule}")]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

/// Every field error found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// The error for a field, if that field failed.
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    fn push(&mut self, field: Field, rule: Rule) {
        self.errors.push(FieldError { field, rule });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "invalid contact form: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(Field::Name, Rule::MinLength(MIN_NAME_CHARS));
        }
        if !is_valid_email(&self.email) {
            errors.push(Field::Email, Rule::EmailFormat);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(Field::Message, Rule::MinLength(MIN_MESSAGE_CHARS));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Dot-atom local part, dotted domain ending in an alphabetic TLD.
pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        )
        .expect("email pattern is valid")
    });

    regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Email Tests ====================

    #[test]
    fn test_valid_emails() {
        for email in [
            "ikram@example.com",
            "first.last+tag@mail.example.org",
            "user_name@sub-domain.co",
        ] {
            assert!(is_valid_email(email), "{}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "bad",
            "no-at.example.com",
            "a@b",
            "a@b.c",
            ".lead@example.com",
            "double..dot@example.com",
            "trail.@example.com",
            "space in@example.com",
            "a@-example.com",
            "a@example.com ",
        ] {
            assert!(!is_valid_email(email), "{}", email);
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_all_fields_invalid() {
        let form = ContactForm::new("A", "bad", "short");

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.fields(), vec![Field::Name, Field::Email, Field::Message]);
        assert_eq!(
            errors.for_field(Field::Name).map(|e| e.rule),
            Some(Rule::MinLength(2))
        );
        assert_eq!(
            errors.for_field(Field::Email).map(|e| e.rule),
            Some(Rule::EmailFormat)
        );
        assert_eq!(
            errors.for_field(Field::Message).map(|e| e.rule),
            Some(Rule::MinLength(10))
        );
    }

    #[test]
    fn test_validate_valid_form() {
        let form = ContactForm::new("Ikram", "ikram@example.com", "Hello, nice portfolio!");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_boundaries() {
        let form = ContactForm::new("Al", "al@example.com", "0123456789");
        assert!(form.validate().is_ok());

        let form = ContactForm::new("Al", "al@example.com", "012345678");
        assert_eq!(form.validate().unwrap_err().fields(), vec![Field::Message]);
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // Two Arabic letters are four bytes but two characters
        let form = ContactForm::new("إك", "ikram@example.com", "مرحبا بكم جميعا");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ContactForm::new("A", "ikram@example.com", "long enough text")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.to_string(),
            "invalid contact form: name must be at least 2 characters"
        );
    }

    // ==================== Form Tests ====================

    #[test]
    fn test_set_get_and_clear() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());

        form.set(Field::Email, "x@example.com");
        assert_eq!(form.get(Field::Email), "x@example.com");
        assert!(!form.is_empty());

        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::Name.error_key(), "contact.validation.name");
        assert_eq!(Field::Message.placeholder_key(), "contact.messagePlaceholder");
        assert_eq!(Field::Email.label_key(), "contact.email");
    }
}
