//! Server-side feedback records
//!
//! `FeedbackPayload` is what arrives over the wire, trusted for nothing.
//! `NewFeedback` has passed the presence check. `PersistedFeedback` is the
//! stored document; it is created once and never changed.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

use super::value_objects::{Gender, Language, Ratings};

/// Identifier of a stored feedback document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FeedbackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Request body of `POST /api/feedback` as the server sees it.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackPayload {
    #[schema(example = "Asha Devi")]
    pub patient_name: Option<String>,
    pub age: Option<u8>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub gender: Option<Gender>,
    #[schema(example = "9876543210")]
    pub phone_number: Option<String>,
    #[schema(example = "cardiology")]
    pub department: Option<String>,
    pub ratings: Option<Ratings>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub language: Option<Language>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl FeedbackPayload {
    /// Presence re-check. Phone format and rating bounds are not examined here.
    pub fn into_new_feedback(self) -> Result<NewFeedback, FeedbackError> {
        let patient_name = present(self.patient_name);
        let phone_number = present(self.phone_number);
        let department = present(self.department);

        match (patient_name, phone_number, department, self.ratings) {
            (Some(patient_name), Some(phone_number), Some(department), Some(ratings)) => Ok(NewFeedback {
                patient_name,
                age: self.age.filter(|a| *a > 0),
                gender: self.gender,
                phone_number,
                department,
                ratings,
                comments: self.comments.map(|c| c.trim().to_string()).unwrap_or_default(),
                language: self.language.unwrap_or_default(),
                submitted_at: self.submitted_at,
            }),
            _ => Err(FeedbackError::MissingRequiredFields),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Feedback that passed the presence check, awaiting storage.
#[derive(Clone, Debug, PartialEq)]
pub struct NewFeedback {
    pub patient_name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub phone_number: String,
    pub department: String,
    pub ratings: Ratings,
    pub comments: String,
    pub language: Language,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Stored feedback document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedFeedback {
    id: FeedbackId,
    patient_name: String,
    age: Option<u8>,
    gender: Option<Gender>,
    phone_number: String,
    department: String,
    ratings: Ratings,
    comments: String,
    language: Language,
    submitted_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PersistedFeedback {
    /// Stamp identity and timestamps. Called by the stores only.
    pub fn create(new: NewFeedback, id: FeedbackId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            patient_name: new.patient_name,
            age: new.age,
            gender: new.gender,
            phone_number: new.phone_number,
            department: new.department,
            ratings: new.ratings,
            comments: new.comments,
            language: new.language,
            submitted_at: new.submitted_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Schema rules the store enforces on every insert.
    pub fn check_constraints(&self) -> Result<(), FeedbackError> {
        if self.patient_name.trim().is_empty() {
            return Err(FeedbackError::ConstraintViolation("patientName is required".into()));
        }
        if self.phone_number.is_empty() {
            return Err(FeedbackError::ConstraintViolation("phoneNumber is required".into()));
        }
        if self.department.is_empty() {
            return Err(FeedbackError::ConstraintViolation("department is required".into()));
        }

        let out_of_range = self.ratings.out_of_range();
        if let Some(dimension) = out_of_range.first() {
            return Err(FeedbackError::ConstraintViolation(format!(
                "ratings.{} must be between 0 and 5, got {}",
                dimension,
                self.ratings.get(*dimension)
            )));
        }

        Ok(())
    }

    pub fn id(&self) -> &FeedbackId { &self.id }
    pub fn patient_name(&self) -> &str { &self.patient_name }
    pub fn age(&self) -> Option<u8> { self.age }
    pub fn gender(&self) -> Option<Gender> { self.gender }
    pub fn phone_number(&self) -> &str { &self.phone_number }
    pub fn department(&self) -> &str { &self.department }
    pub fn ratings(&self) -> &Ratings { &self.ratings }
    pub fn comments(&self) -> &str { &self.comments }
    pub fn language(&self) -> Language { self.language }
    pub fn submitted_at(&self) -> DateTime<Utc> { self.submitted_at }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
}

/// 201 response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackCreated {
    #[schema(example = "Feedback saved")]
    pub message: String,
    pub id: String,
}

/// 4xx/5xx response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Missing required fields")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RatingDimension;

    fn payload(json: &str) -> FeedbackPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_complete_payload_passes() {
        let new = payload(
            r#"{"patientName":" Asha Devi ","phoneNumber":"9876543210","department":"cardiology",
                "ratings":{"overallSatisfaction":5},"language":"en"}"#,
        )
        .into_new_feedback()
        .unwrap();

        assert_eq!(new.patient_name, "Asha Devi");
        assert_eq!(new.ratings.get(RatingDimension::OverallSatisfaction), 5);
        assert_eq!(new.comments, "");
        assert!(new.gender.is_none());
        assert!(new.age.is_none());
    }

    #[test]
    fn test_each_required_field() {
        let base = r#"{"patientName":"A","phoneNumber":"1","department":"x","ratings":{}}"#;
        assert!(payload(base).into_new_feedback().is_ok());

        for missing in ["patientName", "phoneNumber", "department", "ratings"] {
            let mut value: serde_json::Value = serde_json::from_str(base).unwrap();
            value.as_object_mut().unwrap().remove(missing);
            let p: FeedbackPayload = serde_json::from_value(value).unwrap();
            assert_eq!(p.into_new_feedback(), Err(FeedbackError::MissingRequiredFields), "{}", missing);
        }
    }

    #[test]
    fn test_blank_strings_are_missing() {
        let p = payload(r#"{"patientName":"  ","phoneNumber":"1","department":"x","ratings":{}}"#);
        assert_eq!(p.into_new_feedback(), Err(FeedbackError::MissingRequiredFields));

        let p = payload(r#"{"patientName":"A","phoneNumber":"1","department":"","ratings":{}}"#);
        assert_eq!(p.into_new_feedback(), Err(FeedbackError::MissingRequiredFields));
    }

    #[test]
    fn test_null_ratings_is_missing() {
        let p = payload(r#"{"patientName":"A","phoneNumber":"1","department":"x","ratings":null}"#);
        assert_eq!(p.into_new_feedback(), Err(FeedbackError::MissingRequiredFields));
    }

    #[test]
    fn test_empty_enums_read_as_absent() {
        let p = payload(r#"{"gender":"","language":""}"#);
        assert!(p.gender.is_none());
        assert!(p.language.is_none());

        let p = payload(r#"{"gender":"female","language":"hi"}"#);
        assert_eq!(p.gender, Some(Gender::Female));
        assert_eq!(p.language, Some(Language::Hi));
    }

    #[test]
    fn test_unknown_enum_is_rejected() {
        assert!(serde_json::from_str::<FeedbackPayload>(r#"{"gender":"robot"}"#).is_err());
        assert!(serde_json::from_str::<FeedbackPayload>(r#"{"language":"fr"}"#).is_err());
    }

    #[test]
    fn test_defaults_on_create() {
        let new = payload(r#"{"patientName":"A","phoneNumber":"1","department":"x","ratings":{},"age":0}"#)
            .into_new_feedback()
            .unwrap();
        let now = Utc::now();
        let record = PersistedFeedback::create(new, FeedbackId::new(), now);

        assert_eq!(record.age(), None);
        assert_eq!(record.language(), Language::En);
        assert_eq!(record.submitted_at(), now);
        assert_eq!(record.created_at(), record.updated_at());
        assert!(record.check_constraints().is_ok());
    }

    #[test]
    fn test_rating_constraint() {
        let new = payload(
            r#"{"patientName":"A","phoneNumber":"1","department":"x","ratings":{"waitTimes":9}}"#,
        )
        .into_new_feedback()
        .unwrap();
        let record = PersistedFeedback::create(new, FeedbackId::new(), Utc::now());

        match record.check_constraints() {
            Err(FeedbackError::ConstraintViolation(msg)) => assert!(msg.contains("waitTimes")),
            other => panic!("expected constraint violation, got {:?}", other),
        }
    }

    #[test]
    fn test_persisted_wire_shape() {
        let new = payload(r#"{"patientName":"A","phoneNumber":"1","department":"x","ratings":{}}"#)
            .into_new_feedback()
            .unwrap();
        let record = PersistedFeedback::create(new, FeedbackId::from_string("abc"), Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc");
        assert!(json["gender"].is_null());
        assert_eq!(json["comments"], "");
        assert!(json.get("createdAt").is_some());
    }
}
