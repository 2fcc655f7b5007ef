use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::connector::api::{ApiError, Container};
use crate::domain::{ChatReply, DomainError, GeneratedContent};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentRequest {
    pub product_name: String,
    pub keywords: String,
    pub tone: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub product_name: String,
    pub message: String,
}

/// `POST /ai/generate-content`: draft a title and description. Every
/// failure is a 500 here, whatever went wrong upstream.
pub async fn generate_content(
    State(container): State<Arc<Container>>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GeneratedContent>, ApiError> {
    container
        .generate_content_use_case()
        .execute(&request.product_name, &request.keywords, &request.tone)
        .await
        .map(Json)
        .map_err(|e| {
            error!("AI generation error: {e}");
            match e {
                DomainError::ExtractionError(_) => ApiError::internal(
                    "AI model returned an invalid format. Please try again.",
                    None,
                ),
                other => {
                    ApiError::internal("Failed to generate AI content.", Some(other.to_string()))
                }
            }
        })
}

/// `POST /ai/chat`: one marketing tip. A non-success status from the
/// inference API is propagated to the caller with the raw upstream text as
/// `details`; everything else is a 500.
pub async fn chat(
    State(container): State<Arc<Container>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    container
        .chat_use_case()
        .execute(&request.product_name, &request.message)
        .await
        .map(Json)
        .map_err(|e| {
            error!("AI chat error: {e}");
            match e {
                DomainError::UpstreamError {
                    status: Some(status),
                    detail,
                } => ApiError::from_upstream_status(
                    Some(status),
                    "Failed to communicate with AI.",
                    Some(detail),
                ),
                DomainError::UpstreamError {
                    status: None,
                    detail,
                } => ApiError::internal("Chatbot is currently unavailable.", Some(detail)),
                DomainError::EmptyReply => {
                    ApiError::internal("AI model returned an empty reply.", None)
                }
                other => {
                    ApiError::internal("Chatbot is currently unavailable.", Some(other.to_string()))
                }
            }
        })
}
