//! Wizard steps and what each one shows
//!
//! A [`StepView`] is a plain snapshot built from the wizard state. Front
//! ends render it and feed user input back through the wizard; they never
//! read the draft directly.

use feedback_core::{Department, Draft, Field, Gender, Language, RatingDimension};

use crate::strings::Strings;
use crate::wizard::ValidationErrors;

/// Position in the survey. Steps only move one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Language,
    Demographics,
    Ratings,
    Comments,
    Success,
}

/// Steps counted by the progress bar
pub const PROGRESS_STEPS: u8 = 4;

impl WizardStep {
    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Language => 1,
            Self::Demographics => 2,
            Self::Ratings => 3,
            Self::Comments => 4,
            Self::Success => 5,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Language => Some(Self::Demographics),
            Self::Demographics => Some(Self::Ratings),
            Self::Ratings => Some(Self::Comments),
            Self::Comments => Some(Self::Success),
            Self::Success => None,
        }
    }

    /// Only the form steps can go back. Language has nothing before it and
    /// Success is final.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Demographics => Some(Self::Language),
            Self::Ratings => Some(Self::Demographics),
            Self::Comments => Some(Self::Ratings),
            Self::Language | Self::Success => None,
        }
    }

    /// `(current, total)` while a progress bar is shown
    pub fn progress(&self) -> Option<Progress> {
        match self {
            Self::Demographics | Self::Ratings | Self::Comments => Some(Progress {
                current: self.number(),
                total: PROGRESS_STEPS,
            }),
            Self::Language | Self::Success => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub current: u8,
    pub total: u8,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        ((u16::from(self.current) * 100) / u16::from(self.total.max(1))) as u8
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepView {
    Language(LanguageView),
    Demographics(DemographicsView),
    Ratings(RatingsView),
    Comments(CommentsView),
    Success(SuccessView),
}

impl StepView {
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Language(_) => WizardStep::Language,
            Self::Demographics(_) => WizardStep::Demographics,
            Self::Ratings(_) => WizardStep::Ratings,
            Self::Comments(_) => WizardStep::Comments,
            Self::Success(_) => WizardStep::Success,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LanguageView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt: &'static str,
    pub options: Vec<LanguageOption>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LanguageOption {
    pub language: Language,
    /// Name in its own script
    pub label: &'static str,
    pub sub_label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceView<T> {
    pub field: Field,
    pub label: &'static str,
    /// Shown when nothing is chosen
    pub placeholder: Option<&'static str>,
    pub options: Vec<(T, &'static str)>,
    pub selected: Option<T>,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemographicsView {
    pub progress: Progress,
    pub name: InputView,
    pub phone: InputView,
    pub age: InputView,
    pub gender: ChoiceView<Gender>,
    pub department: ChoiceView<Department>,
    pub next_label: &'static str,
    pub back_label: &'static str,
}

/// Colour band of a rating: 1-2 low, 3 mid, 4-5 high.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingTone {
    Low,
    Mid,
    High,
}

impl RatingTone {
    pub fn of(value: u8) -> Option<Self> {
        match value {
            1 | 2 => Some(Self::Low),
            3 => Some(Self::Mid),
            4 | 5 => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingRow {
    pub dimension: RatingDimension,
    pub label: &'static str,
    pub value: u8,
    pub value_label: Option<&'static str>,
    pub tone: Option<RatingTone>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingsView {
    pub progress: Progress,
    pub rows: Vec<RatingRow>,
    pub next_label: &'static str,
    pub back_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentsView {
    pub progress: Progress,
    pub heading: &'static str,
    pub hint: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// `submitting` while a request is in flight
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub back_label: &'static str,
    pub back_enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuccessView {
    pub title: &'static str,
    pub message: &'static str,
    pub another_label: &'static str,
    /// Server-assigned id of the stored response
    pub receipt_id: Option<String>,
}

pub(crate) struct ViewContext<'a> {
    pub step: WizardStep,
    pub draft: &'a Draft,
    pub errors: &'a ValidationErrors,
    pub strings: &'static Strings,
    pub in_flight: bool,
    pub receipt_id: Option<&'a str>,
}

pub(crate) fn build(ctx: ViewContext<'_>) -> StepView {
    let t = ctx.strings;
    let progress = ctx.step.progress().unwrap_or(Progress {
        current: ctx.step.number(),
        total: PROGRESS_STEPS,
    });

    match ctx.step {
        WizardStep::Language => StepView::Language(LanguageView {
            title: t.title,
            subtitle: t.subtitle,
            prompt: t.select_language,
            options: Language::ALL
                .iter()
                .map(|&language| LanguageOption {
                    language,
                    label: language.native_name(),
                    sub_label: language.english_name(),
                    selected: language == ctx.draft.language,
                })
                .collect(),
        }),

        WizardStep::Demographics => {
            let error = |field| ctx.errors.get(field).map(str::to_string);
            let draft = ctx.draft;

            StepView::Demographics(DemographicsView {
                progress,
                name: InputView {
                    field: Field::PatientName,
                    label: t.fields.name,
                    value: draft.patient_name.clone(),
                    required: true,
                    error: error(Field::PatientName),
                },
                phone: InputView {
                    field: Field::PhoneNumber,
                    label: t.fields.phone,
                    value: draft.phone_number.clone(),
                    required: true,
                    error: error(Field::PhoneNumber),
                },
                age: InputView {
                    field: Field::Age,
                    label: t.fields.age,
                    value: draft.age.map(|a| a.to_string()).unwrap_or_default(),
                    required: false,
                    error: error(Field::Age),
                },
                gender: ChoiceView {
                    field: Field::Gender,
                    label: t.fields.gender,
                    placeholder: Some(t.fields.gender_select),
                    options: Gender::ALL.iter().map(|&g| (g, t.gender_label(g))).collect(),
                    selected: draft.gender,
                    required: false,
                    error: error(Field::Gender),
                },
                department: ChoiceView {
                    field: Field::Department,
                    label: t.fields.department,
                    placeholder: None,
                    options: Department::ALL
                        .iter()
                        .map(|&d| (d, t.department_label(d)))
                        .collect(),
                    selected: draft.department,
                    required: true,
                    error: error(Field::Department),
                },
                next_label: t.next,
                back_label: t.back,
            })
        }

        WizardStep::Ratings => StepView::Ratings(RatingsView {
            progress,
            rows: ctx
                .draft
                .ratings
                .iter()
                .map(|(dimension, value)| RatingRow {
                    dimension,
                    label: t.rating_label(dimension),
                    value,
                    value_label: t.scale_label(value),
                    tone: RatingTone::of(value),
                })
                .collect(),
            next_label: t.next,
            back_label: t.back,
        }),

        WizardStep::Comments => StepView::Comments(CommentsView {
            progress,
            heading: t.comments.heading,
            hint: t.comments.hint,
            label: t.comments.label,
            placeholder: t.comments.placeholder,
            value: ctx.draft.comments.clone(),
            submit_label: if ctx.in_flight { t.submitting } else { t.submit },
            submit_enabled: !ctx.in_flight,
            back_label: t.back,
            back_enabled: !ctx.in_flight,
        }),

        WizardStep::Success => StepView::Success(SuccessView {
            title: t.success.title,
            message: t.success.message,
            another_label: t.success.another,
            receipt_id: ctx.receipt_id.map(str::to_string),
        }),
    }
}
