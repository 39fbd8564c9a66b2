use super::state::AppState;
use crate::mailer;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Meeting transcript to summarize (required; checked by the generator)
    pub transcript: Option<String>,

    /// Optional directive shaping the summary
    pub instruction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    /// Comma-separated recipient addresses
    pub recipients: Option<String>,

    pub subject: Option<String>,

    /// Summary text, sent as the plain-text body
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/generate-summary
/// Summarize a transcript, falling back to a mock summary when OpenAI is
/// unavailable
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> impl IntoResponse {
    let transcript = req.transcript.unwrap_or_default();
    let instruction = req.instruction.unwrap_or_default();

    match state.summarizer.generate(&transcript, &instruction).await {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse { summary })).into_response(),
        Err(e) => {
            error!("Summary error: {}", e);
            let message = e.to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: if message.is_empty() {
                        "Error generating summary".to_string()
                    } else {
                        message
                    },
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/send-email
/// Email a summary to a comma-separated list of recipients
pub async fn send_email(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> impl IntoResponse {
    let recipients = req.recipients.unwrap_or_default();
    let subject = req.subject.unwrap_or_default();
    let summary = req.summary.unwrap_or_default();

    if recipients.is_empty() || subject.is_empty() || summary.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipients, subject, and summary are required to send email."
                    .to_string(),
            }),
        )
            .into_response();
    }

    let (user, pass) = match state.config.email_credentials() {
        Some(credentials) => credentials,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Email credentials not set. Add EMAIL_USER and EMAIL_PASS to environment variables."
                        .to_string(),
                }),
            )
                .into_response();
        }
    };

    let to = mailer::parse_recipients(&recipients);
    info!("Sending summary email to {} recipient(s)", to.len());

    match mailer::send_summary(user, pass, &to, &subject, &summary).await {
        Ok(()) => (
            StatusCode::OK,
            Json(EmailResponse {
                message: "Email sent successfully!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Email error: {}", e);
            let message = e.to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: if message.is_empty() {
                        "Error sending email".to_string()
                    } else {
                        message
                    },
                }),
            )
                .into_response()
        }
    }
}

/// GET /
/// Health check endpoint; reports whether OpenAI summaries are active
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let openai = if state.config.openai_enabled() {
        "enabled"
    } else {
        "disabled (mock summaries active)"
    };

    (
        StatusCode::OK,
        format!("Meeting Notes AI backend is running! OpenAI {}", openai),
    )
}
