//! Draft - the in-progress response held by the survey client
//!
//! The draft is also the request body of `POST /api/feedback`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::{is_valid_phone, Department, Gender, Language, Ratings};

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub patient_name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub phone_number: String,
    pub department: Option<Department>,
    pub ratings: Ratings,
    pub comments: String,
    pub language: Language,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Draft {
    pub fn new(language: Language) -> Self {
        Self { language, ..Self::default() }
    }

    /// Merge one edited field into the draft.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::PatientName(v) => self.patient_name = v,
            FieldUpdate::Age(v) => self.age = v,
            FieldUpdate::Gender(v) => self.gender = v,
            FieldUpdate::PhoneNumber(v) => self.phone_number = v,
            FieldUpdate::Department(v) => self.department = Some(v),
            FieldUpdate::Comments(v) => self.comments = v,
        }
    }
}

/// Editable draft fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PatientName,
    Age,
    Gender,
    PhoneNumber,
    Department,
    Comments,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Self::PatientName => "patientName",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::PhoneNumber => "phoneNumber",
            Self::Department => "department",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A typed edit to one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    PatientName(String),
    Age(Option<u8>),
    Gender(Option<Gender>),
    PhoneNumber(String),
    Department(Department),
    Comments(String),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            Self::PatientName(_) => Field::PatientName,
            Self::Age(_) => Field::Age,
            Self::Gender(_) => Field::Gender,
            Self::PhoneNumber(_) => Field::PhoneNumber,
            Self::Department(_) => Field::Department,
            Self::Comments(_) => Field::Comments,
        }
    }
}

/// Reasons the demographics step cannot be left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    NameRequired,
    /// Covers both a missing and a malformed number
    InvalidPhone,
    DepartmentRequired,
    AgeOutOfRange,
}

impl ValidationIssue {
    pub fn field(&self) -> Field {
        match self {
            Self::NameRequired => Field::PatientName,
            Self::InvalidPhone => Field::PhoneNumber,
            Self::DepartmentRequired => Field::Department,
            Self::AgeOutOfRange => Field::Age,
        }
    }
}

/// Check every demographics rule, returning all failures in field order.
pub fn validate_demographics(draft: &Draft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if draft.patient_name.trim().is_empty() {
        issues.push(ValidationIssue::NameRequired);
    }

    if let Some(age) = draft.age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            issues.push(ValidationIssue::AgeOutOfRange);
        }
    }

    if draft.phone_number.trim().is_empty() || !is_valid_phone(&draft.phone_number) {
        issues.push(ValidationIssue::InvalidPhone);
    }

    if draft.department.is_none() {
        issues.push(ValidationIssue::DepartmentRequired);
    }

    issues
}
