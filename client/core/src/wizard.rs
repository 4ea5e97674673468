//! Survey state machine
//!
//! ```text
//!  Language(1) ──▶ Demographics(2) ──▶ Ratings(3) ──▶ Comments(4) ──submit──▶ Success(5)
//!                        ◀── retreat ──      ◀── retreat ──                         │
//!      ▲                                                                            │
//!      └──────────────────────────────── reset ◀────────────────────────────────────┘
//! ```
//!
//! The wizard owns the draft, the current errors and the toast queue. Every
//! operation either moves exactly one step or leaves the step unchanged.

use chrono::Utc;
use feedback_core::{
    validate_demographics, Draft, FeedbackCreated, Field, FieldUpdate, Language, RatingDimension,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::steps::{self, StepView, ViewContext, WizardStep};
use crate::strings::{strings_for, Strings};
use crate::submit::{FeedbackSubmitter, SubmitError};
use crate::toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_LIFETIME};

/// What an operation did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved(WizardStep),
    /// Validation failed. Errors and an error toast were recorded.
    Blocked,
    /// Stored by the server under this id
    Submitted(String),
    /// The request failed. The draft is untouched and may be resubmitted.
    SubmitFailed,
    /// A submission was already in flight
    Suppressed,
    /// Not meaningful on the current step
    Ignored,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Localized message per invalid field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn remove(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub struct FormWizard {
    step: WizardStep,
    draft: Draft,
    errors: ValidationErrors,
    toasts: ToastQueue,
    in_flight: bool,
    receipt: Option<FeedbackCreated>,
    submitter: Arc<dyn FeedbackSubmitter>,
}

impl FormWizard {
    pub fn new(submitter: Arc<dyn FeedbackSubmitter>) -> Self {
        Self::with_toast_lifetime(submitter, DEFAULT_TOAST_LIFETIME)
    }

    pub fn with_toast_lifetime(submitter: Arc<dyn FeedbackSubmitter>, lifetime: Duration) -> Self {
        Self {
            step: WizardStep::Language,
            draft: Draft::default(),
            errors: ValidationErrors::default(),
            toasts: ToastQueue::new(lifetime),
            in_flight: false,
            receipt: None,
            submitter,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Server response of the last successful submission
    pub fn receipt(&self) -> Option<&FeedbackCreated> {
        self.receipt.as_ref()
    }

    pub fn strings(&self) -> &'static Strings {
        strings_for(self.draft.language)
    }

    /// Pick the survey language. Only offered on the first step, which it leaves.
    pub fn select_language(&mut self, language: Language) -> Outcome {
        if self.step != WizardStep::Language {
            return Outcome::Ignored;
        }

        self.draft.language = language;
        self.step = WizardStep::Demographics;
        tracing::debug!("Survey language set to {}", language);
        Outcome::Moved(self.step)
    }

    /// Merge an edit into the draft and clear that field's error.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.errors.remove(update.field());
        self.draft.apply(update);
    }

    pub fn set_rating(&mut self, dimension: RatingDimension, value: u8) -> Result<(), WizardError> {
        if !(1..=5).contains(&value) {
            return Err(WizardError::RatingOutOfRange(value));
        }
        self.draft.ratings.set(dimension, value);
        Ok(())
    }

    /// Validate the current step and move forward. Leaving Comments submits.
    pub async fn advance(&mut self) -> Outcome {
        match self.step {
            WizardStep::Success => Outcome::Ignored,
            WizardStep::Comments => self.submit().await,
            step => {
                if !self.check_step(step) {
                    return Outcome::Blocked;
                }
                match step.next() {
                    Some(next) => {
                        self.step = next;
                        Outcome::Moved(next)
                    }
                    None => Outcome::Ignored,
                }
            }
        }
    }

    /// Go back one step without validating. Not available while submitting.
    pub fn retreat(&mut self) -> Outcome {
        if self.in_flight {
            return Outcome::Ignored;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Outcome::Moved(previous)
            }
            None => Outcome::Ignored,
        }
    }

    /// Send the draft and wait for the server.
    pub async fn submit(&mut self) -> Outcome {
        let draft = match self.begin_submission() {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let submitter = Arc::clone(&self.submitter);
        let result = submitter.submit(&draft).await;
        self.complete_submission(result)
    }

    /// First half of [`submit`](Self::submit), for hosts that run the request
    /// themselves. Marks the wizard in flight and returns the stamped draft.
    /// `Err` holds the outcome to report when nothing should be sent.
    pub fn begin_submission(&mut self) -> Result<Draft, Outcome> {
        if self.step != WizardStep::Comments {
            return Err(Outcome::Ignored);
        }
        if self.in_flight {
            tracing::debug!("Submission already in flight");
            return Err(Outcome::Suppressed);
        }
        if !self.check_step(WizardStep::Demographics) || !self.check_step(WizardStep::Ratings) {
            return Err(Outcome::Blocked);
        }

        self.draft.submitted_at = Some(Utc::now());
        self.in_flight = true;
        Ok(self.draft.clone())
    }

    /// Second half of [`submit`](Self::submit).
    pub fn complete_submission(&mut self, result: Result<FeedbackCreated, SubmitError>) -> Outcome {
        if !self.in_flight {
            return Outcome::Ignored;
        }
        self.in_flight = false;
        let t = self.strings();

        match result {
            Ok(created) => {
                tracing::info!("Feedback submitted: {}", created.id);
                let id = created.id.clone();
                self.receipt = Some(created);
                self.step = WizardStep::Success;
                self.notify(t.success.toast, ToastKind::Success);
                Outcome::Submitted(id)
            }
            Err(e) => {
                tracing::warn!("Feedback submission failed: {}", e);
                self.notify(t.errors.submit_failed, ToastKind::Error);
                Outcome::SubmitFailed
            }
        }
    }

    /// Start over with an empty draft. Only the Success step can be left this
    /// way. Showing toasts run out on their own.
    pub fn reset(&mut self) -> Outcome {
        if self.step != WizardStep::Success {
            return Outcome::Ignored;
        }

        self.step = WizardStep::Language;
        self.draft = Draft::default();
        self.errors.clear();
        self.receipt = None;
        Outcome::Moved(self.step)
    }

    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn expire_toasts(&mut self, now: Instant) -> Vec<Toast> {
        self.toasts.expire(now)
    }

    pub fn view(&self) -> StepView {
        steps::build(ViewContext {
            step: self.step,
            draft: &self.draft,
            errors: &self.errors,
            strings: self.strings(),
            in_flight: self.in_flight,
            receipt_id: self.receipt.as_ref().map(|r| r.id.as_str()),
        })
    }

    /// Recompute errors for `step`. False means the step cannot be left.
    fn check_step(&mut self, step: WizardStep) -> bool {
        let t = self.strings();
        self.errors.clear();

        match step {
            WizardStep::Demographics => {
                let issues = validate_demographics(&self.draft);
                for issue in &issues {
                    self.errors.insert(issue.field(), t.issue_message(*issue));
                }
                if issues.is_empty() {
                    true
                } else {
                    self.notify(t.errors.fill_required, ToastKind::Error);
                    false
                }
            }
            WizardStep::Ratings => {
                if self.draft.ratings.any_rated() {
                    true
                } else {
                    self.notify(t.errors.rating_required, ToastKind::Error);
                    false
                }
            }
            _ => true,
        }
    }

    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.toasts.push(message, kind, Instant::now());
    }
}
