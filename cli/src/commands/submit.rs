//! Submit a prepared draft file

use anyhow::{anyhow, bail, Context};
use feedback_client::{ClientConfig, FeedbackSubmitter, FormWizard, Outcome};
use feedback_core::{Draft, FeedbackCreated, FieldUpdate};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::http_submitter;
use crate::output::OutputFormat;

pub async fn handle(file: &Path, config: &ClientConfig, format: OutputFormat) -> anyhow::Result<()> {
    let draft = load_draft(file)?;
    let receipt = submit_draft(draft, http_submitter(config)?).await?;
    format.print(&receipt);
    Ok(())
}

pub fn load_draft(path: &Path) -> anyhow::Result<Draft> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Run a complete draft through every wizard step and submit it once.
pub async fn submit_draft(
    draft: Draft,
    submitter: Arc<dyn FeedbackSubmitter>,
) -> anyhow::Result<FeedbackCreated> {
    let mut wizard = FormWizard::new(submitter);
    wizard.select_language(draft.language);

    wizard.update_field(FieldUpdate::PatientName(draft.patient_name));
    wizard.update_field(FieldUpdate::Age(draft.age));
    wizard.update_field(FieldUpdate::Gender(draft.gender));
    wizard.update_field(FieldUpdate::PhoneNumber(draft.phone_number));
    if let Some(department) = draft.department {
        wizard.update_field(FieldUpdate::Department(department));
    }
    wizard.update_field(FieldUpdate::Comments(draft.comments));
    for (dimension, value) in draft.ratings.iter().filter(|(_, v)| *v > 0) {
        wizard
            .set_rating(dimension, value)
            .with_context(|| format!("ratings.{}", dimension))?;
    }

    loop {
        match wizard.advance().await {
            Outcome::Moved(step) => tracing::debug!("Draft passed into step {}", step.number()),
            Outcome::Submitted(_) => break,
            Outcome::Blocked => {
                let mut problems: Vec<String> =
                    wizard.errors().iter().map(|(f, m)| format!("{}: {}", f, m)).collect();
                if problems.is_empty() {
                    problems.extend(wizard.toasts().latest().map(|t| t.message.clone()));
                }
                bail!("draft is incomplete\n  {}", problems.join("\n  "));
            }
            Outcome::SubmitFailed => bail!("submission failed; the draft was not stored"),
            other => bail!("unexpected wizard outcome: {:?}", other),
        }
    }

    wizard
        .receipt()
        .cloned()
        .ok_or_else(|| anyhow!("submission finished without a receipt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use feedback_client::SubmitError;
    use feedback_core::{Department, Language, RatingDimension};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: Mutex<Vec<Draft>>,
    }

    #[async_trait]
    impl FeedbackSubmitter for RecordingSubmitter {
        async fn submit(&self, draft: &Draft) -> Result<FeedbackCreated, SubmitError> {
            self.sent.lock().push(draft.clone());
            Ok(FeedbackCreated {
                message: "Feedback saved".into(),
                id: format!("fb-{}", self.sent.lock().len()),
            })
        }
    }

    const YAML_DRAFT: &str = r#"
patientName: Ravi Kumar
age: 58
gender: male
phoneNumber: "98540-12345"
department: general-medicine
language: as
ratings:
  overallSatisfaction: 4
  waitTimes: 2
comments: Long queue at the pharmacy
"#;

    #[tokio::test]
    async fn test_yaml_draft_is_submitted() {
        let path = std::env::temp_dir().join(format!("feedback-draft-{}.yaml", std::process::id()));
        fs::write(&path, YAML_DRAFT).unwrap();
        let draft = load_draft(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(draft.department, Some(Department::GeneralMedicine));
        assert_eq!(draft.language, Language::As);

        let submitter = Arc::new(RecordingSubmitter::default());
        let receipt = submit_draft(draft, submitter.clone()).await.unwrap();
        assert_eq!(receipt.id, "fb-1");

        let sent = submitter.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].ratings.get(RatingDimension::WaitTimes), 2);
        assert_eq!(sent[0].language, Language::As);
        assert!(sent[0].submitted_at.is_some());
    }

    #[tokio::test]
    async fn test_incomplete_draft_is_not_sent() {
        let draft: Draft = serde_json::from_str(
            r#"{"patientName":"Ravi","phoneNumber":"123","ratings":{"communication":3}}"#,
        )
        .unwrap();

        let submitter = Arc::new(RecordingSubmitter::default());
        let err = submit_draft(draft, submitter.clone()).await.unwrap_err();
        let message = err.to_string();

        assert!(message.contains("phoneNumber"));
        assert!(message.contains("department"));
        assert!(submitter.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_unrated_draft_reports_toast() {
        let draft: Draft = serde_json::from_str(
            r#"{"patientName":"Ravi","phoneNumber":"9854012345","department":"surgery"}"#,
        )
        .unwrap();

        let err = submit_draft(draft, Arc::new(RecordingSubmitter::default()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least one rating"));
    }

    #[tokio::test]
    async fn test_out_of_scale_rating_in_file() {
        let draft: Draft = serde_json::from_str(
            r#"{"patientName":"Ravi","phoneNumber":"9854012345","department":"surgery",
                "ratings":{"communication":9}}"#,
        )
        .unwrap();

        let err = submit_draft(draft, Arc::new(RecordingSubmitter::default()))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("ratings.communication"));
    }
}
