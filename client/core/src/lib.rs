//! Patient Feedback Client - survey wizard core
//!
//! Front-end independent: a kiosk, terminal or web host drives the same
//! [`FormWizard`] and renders its [`StepView`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FEEDBACK CLIENT                       │
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  FormWizard  │──▶│  StepView    │   │  Strings         │  │
//! │  │ (state, draft│   │ (per-step    │◀──│ (en / hi / as)   │  │
//! │  │  errors)     │   │  view-model) │   └──────────────────┘  │
//! │  └──────┬───────┘   └──────────────┘                         │
//! │         │                                                    │
//! │  ┌──────▼───────┐   ┌──────────────────────────────────────┐ │
//! │  │  ToastQueue  │   │  FeedbackSubmitter ── HttpSubmitter  │ │
//! │  │ (deadlines)  │   │  POST /api/feedback                  │ │
//! │  └──────────────┘   └──────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod steps;
pub mod strings;
pub mod submit;
pub mod toast;
pub mod wizard;

pub use config::ClientConfig;
pub use steps::{Progress, StepView, WizardStep};
pub use strings::{strings_for, Strings};
pub use submit::{FeedbackSubmitter, HttpSubmitter, SubmitError};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use wizard::{FormWizard, Outcome, ValidationErrors, WizardError};
