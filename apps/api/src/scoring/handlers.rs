//! Axum route handler for the scoring pipeline.
//!
//! One upload triggers one linear run: extraction → similarity + heuristics →
//! composite report → redaction → notification. Delivery failure is caught
//! here and surfaced as a status so the computed report is never discarded.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::redaction::Identity;
use crate::scoring::extract::{extract_text, DocumentFormat};
use crate::scoring::heuristics::annotate;
use crate::scoring::report::{compose, ScoreReport};
use crate::scoring::similarity::similarity_score;
use crate::state::AppState;

/// Outcome of the notification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    SkippedNoEmail,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub masked_name: String,
    pub masked_email: String,
    pub delivery: DeliveryStatus,
}

/// POST /api/v1/resumes/score
///
/// Multipart upload with a `file` part (filename selects the extraction
/// strategy). Returns the evaluation report with masked PII and the
/// delivery status of the feedback email.
pub async fn handle_score_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    let (filename, data) = read_file_part(&mut multipart).await?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let format = DocumentFormat::from_filename(&filename);
    let text = extract_text(&data, format)?;

    let similarity = similarity_score(&text, &state.reference);
    let signals = annotate(&text);
    let report = compose(similarity, &signals);
    let identity = Identity::detect(&text);

    let delivery = match &identity.email {
        None => {
            info!("no email address detected in '{filename}'; feedback not sent");
            DeliveryStatus::SkippedNoEmail
        }
        Some(address) => {
            match state
                .mailer
                .send_feedback(address, &identity.masked_name, &report)
                .await
            {
                Ok(()) => {
                    info!("feedback sent to {}", identity.masked_email);
                    DeliveryStatus::Sent
                }
                Err(e) => {
                    warn!("feedback delivery to {} failed: {e}", identity.masked_email);
                    DeliveryStatus::Failed
                }
            }
        }
    };

    Ok(Json(ScoreResponse {
        report,
        masked_name: identity.masked_name,
        masked_email: identity.masked_email,
        delivery,
    }))
}

async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation("missing 'file' part".to_string()))
}
