//! Contact form: field values, local validation, the relay client and the
//! submission lifecycle that ties them to notifications.

mod client;
mod form;
mod pipeline;

pub use client::{ContactClient, SubmissionError, SubmissionRequest, SubmissionResponse};
pub use form::{
    is_valid_email, ContactForm, Field, FieldError, Rule, ValidationErrors, MIN_MESSAGE_CHARS,
    MIN_NAME_CHARS,
};
pub use pipeline::{ContactPipeline, FailureReason, SubmissionState, SubmitOutcome};
