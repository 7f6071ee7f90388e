//! Contact form submission lifecycle.
//!
//! `Idle -> Validating -> Submitting -> Succeeded | Failed`. Validation
//! failures never reach the network. A submit issued while another is in
//! flight is ignored, so a form instance has at most one request outstanding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error, info, warn};

use super::client::{ContactClient, SubmissionError};
use super::form::{ContactForm, Field, ValidationErrors};
use crate::locale::SharedLocale;
use crate::notify::{Notification, NotificationLevel, Notifier};

/// Why the last submit attempt failed.
#[derive(Debug, Clone)]
pub enum FailureReason {
    /// Local checks failed; no request was sent.
    Validation(ValidationErrors),
    /// The request went out but did not succeed. Kept for diagnostics only.
    Submission(Rc<SubmissionError>),
}

#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmissionState::Failed(FailureReason::Validation(errors)) => Some(errors),
            _ => None,
        }
    }

    pub fn submission_error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Failed(FailureReason::Submission(e)) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Result of one call to [`ContactPipeline::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Invalid,
    Failed,
    /// A request was already in flight.
    Ignored,
}

pub struct ContactPipeline {
    client: ContactClient,
    locale: SharedLocale,
    notifier: Rc<dyn Notifier>,
    form: RefCell<ContactForm>,
    state: RefCell<SubmissionState>,
    requests: Cell<usize>,
}

impl ContactPipeline {
    pub fn new(client: ContactClient, locale: SharedLocale, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            client,
            locale,
            notifier,
            form: RefCell::new(ContactForm::default()),
            state: RefCell::new(SubmissionState::Idle),
            requests: Cell::new(0),
        }
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.form.borrow_mut().set(field, value);
    }

    /// Snapshot of the current field values.
    pub fn form(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    /// Number of requests sent to the relay by this form.
    pub fn requests_sent(&self) -> usize {
        self.requests.get()
    }

    /// Localized label for the submit button.
    pub fn submit_label(&self) -> String {
        let key = if self.is_submitting() {
            "contact.sending"
        } else {
            "contact.send"
        };
        self.locale.borrow().translate(key).to_string()
    }

    /// Localized inline error for `field`, if the last attempt flagged it.
    pub fn field_error_message(&self, field: Field) -> Option<String> {
        let state = self.state.borrow();
        let error = state.validation_errors()?.for_field(field)?;
        Some(self.locale.borrow().translate(error.field.error_key()).to_string())
    }

    /// Return to `Idle` after a success has been shown. Failures stay put
    /// until the next submit.
    pub fn acknowledge(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.is_succeeded() {
            *state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }

    /// Validate and, if valid, send the form.
    ///
    /// No `RefCell` borrow is held across the network await, so the page can
    /// keep reading state and translating labels while the request runs.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_submitting() {
            debug!("Submit ignored: a request is already in flight");
            return SubmitOutcome::Ignored;
        }

        self.set_state(SubmissionState::Validating);
        let form = self.form();

        if let Err(errors) = form.validate() {
            warn!("Contact form rejected locally: {}", errors);
            self.set_state(SubmissionState::Failed(FailureReason::Validation(errors)));
            return SubmitOutcome::Invalid;
        }

        self.set_state(SubmissionState::Submitting);
        self.requests.set(self.requests.get() + 1);

        match self.client.send(&form).await {
            Ok(()) => {
                self.form.borrow_mut().clear();
                self.set_state(SubmissionState::Succeeded);
                info!("Contact form sent");
                self.notify(
                    NotificationLevel::Success,
                    "contact.success",
                    "contact.successMessage",
                );
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                error!("Contact form submission failed: {}", e);
                self.set_state(SubmissionState::Failed(FailureReason::Submission(Rc::new(e))));
                self.notify(
                    NotificationLevel::Error,
                    "contact.error",
                    "contact.errorMessage",
                );
                SubmitOutcome::Failed
            }
        }
    }

    fn set_state(&self, state: SubmissionState) {
        *self.state.borrow_mut() = state;
    }

    fn notify(&self, level: NotificationLevel, title_key: &str, description_key: &str) {
        let notification = {
            let locale = self.locale.borrow();
            Notification::new(
                level,
                locale.translate(title_key),
                locale.translate(description_key),
            )
        };
        self.notifier.notify(notification);
    }
}

impl std::fmt::Debug for ContactPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactPipeline")
            .field("endpoint", &self.client.endpoint())
            .field("state", &self.state.borrow())
            .field("requests", &self.requests.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::DocumentRoot;
    use crate::i18n::TranslationCatalog;
    use crate::locale::LocaleManager;
    use crate::notify::Toaster;
    use crate::store::MemoryStore;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ==================== Helper Functions ====================

    fn locale(code: &str) -> SharedLocale {
        LocaleManager::initialize(
            TranslationCatalog::shared(),
            Box::new(MemoryStore::with_value("language", code)),
            Box::new(DocumentRoot::new()),
            None,
        )
        .into_shared()
    }

    fn pipeline(endpoint: String, code: &str) -> (ContactPipeline, Toaster) {
        let config = Config {
            contact_endpoint: endpoint,
            contact_access_key: Some("test-key".to_string()),
            contact_subject: "New Contact from Portfolio Website".to_string(),
            contact_timeout_secs: 5,
            preferences_path: String::new(),
            notification_ttl_secs: 4,
        };
        let toaster = Toaster::default();
        let client = ContactClient::new(&config).unwrap();
        let pipeline = ContactPipeline::new(client, locale(code), Rc::new(toaster.clone()));
        (pipeline, toaster)
    }

    fn fill(pipeline: &ContactPipeline, name: &str, email: &str, message: &str) {
        pipeline.set_field(Field::Name, name);
        pipeline.set_field(Field::Email, email);
        pipeline.set_field(Field::Message, message);
    }

    async fn relay(body: serde_json::Value, expected: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected)
            .mount(&server)
            .await;
        server
    }

    // ==================== Validation Tests ====================

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let server = relay(serde_json::json!({ "success": true }), 0).await;
        let (pipeline, toaster) = pipeline(server.uri(), "en");
        fill(&pipeline, "A", "bad", "short");

        assert_eq!(pipeline.submit().await, SubmitOutcome::Invalid);

        let state = pipeline.state();
        let errors = state.validation_errors().expect("Should fail validation");
        assert_eq!(errors.fields(), vec![Field::Name, Field::Email, Field::Message]);
        assert_eq!(pipeline.requests_sent(), 0);
        assert!(toaster.is_empty());
        assert_eq!(pipeline.form().name, "A");
    }

    #[tokio::test]
    async fn test_field_error_messages_are_localized() {
        let server = relay(serde_json::json!({ "success": true }), 0).await;
        let (pipeline, _) = pipeline(server.uri(), "fr");
        fill(&pipeline, "Ikram", "bad", "long enough message");

        pipeline.submit().await;

        assert_eq!(pipeline.field_error_message(Field::Name), None);
        assert_eq!(
            pipeline.field_error_message(Field::Email).as_deref(),
            Some("Veuillez saisir une adresse e-mail valide.")
        );
    }

    // ==================== Submission Tests ====================

    #[tokio::test]
    async fn test_success_clears_form_and_notifies() {
        let server = relay(serde_json::json!({ "success": true }), 1).await;
        let (pipeline, toaster) = pipeline(server.uri(), "en");
        fill(&pipeline, "Ikram", "ikram@example.com", "Hello, nice portfolio!");

        assert_eq!(pipeline.submit().await, SubmitOutcome::Succeeded);

        assert!(pipeline.state().is_succeeded());
        assert!(pipeline.form().is_empty());
        assert_eq!(pipeline.requests_sent(), 1);

        let toast = toaster.latest().unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.title, "Message sent!");

        assert!(pipeline.acknowledge());
        assert!(matches!(pipeline.state(), SubmissionState::Idle));
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields() {
        let server = relay(serde_json::json!({ "success": false, "message": "x" }), 1).await;
        let (pipeline, toaster) = pipeline(server.uri(), "en");
        fill(&pipeline, "Ikram", "ikram@example.com", "Hello, nice portfolio!");

        assert_eq!(pipeline.submit().await, SubmitOutcome::Failed);

        let state = pipeline.state();
        assert!(matches!(
            state.submission_error(),
            Some(SubmissionError::Rejected { .. })
        ));
        assert_eq!(
            pipeline.form(),
            ContactForm::new("Ikram", "ikram@example.com", "Hello, nice portfolio!")
        );

        let toast = toaster.latest().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.title, "Failed to send message");

        // Failure is not acknowledged away
        assert!(!pipeline.acknowledge());
        assert!(pipeline.state().submission_error().is_some());
    }

    #[tokio::test]
    async fn test_error_notification_follows_language() {
        let server = relay(serde_json::json!({ "success": false }), 1).await;
        let (pipeline, toaster) = pipeline(server.uri(), "ar");
        fill(&pipeline, "إكرام", "ikram@example.com", "رسالة طويلة بما يكفي");

        pipeline.submit().await;

        let toast = toaster.latest().unwrap();
        assert_ne!(toast.title, "contact.error");
        assert_ne!(toast.title, "Failed to send message");
    }

    #[tokio::test]
    async fn test_resubmit_while_in_flight_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": true }))
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (pipeline, _) = pipeline(server.uri(), "en");
        fill(&pipeline, "Ikram", "ikram@example.com", "Hello, nice portfolio!");

        let (first, second) = tokio::join!(pipeline.submit(), async {
            // Let the first submit reach the network before pressing again
            tokio::task::yield_now().await;
            assert!(pipeline.is_submitting());
            assert_eq!(pipeline.submit_label(), "Sending...");
            pipeline.submit().await
        });

        assert_eq!(first, SubmitOutcome::Succeeded);
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(pipeline.requests_sent(), 1);
        assert_eq!(pipeline.submit_label(), "Send Message");
    }

    #[tokio::test]
    async fn test_retry_after_failure_sends_again() {
        let server = relay(serde_json::json!({ "success": false }), 2).await;
        let (pipeline, _) = pipeline(server.uri(), "en");
        fill(&pipeline, "Ikram", "ikram@example.com", "Hello, nice portfolio!");

        assert_eq!(pipeline.submit().await, SubmitOutcome::Failed);
        assert_eq!(pipeline.submit().await, SubmitOutcome::Failed);
        assert_eq!(pipeline.requests_sent(), 2);
    }
}
