use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::DomainError;

/// Default model endpoint. Zephyr-7B is hosted on the free inference tier
/// and is reliably available.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    inputs: &'a str,
    parameters: ApiParameters,
}

#[derive(serde::Serialize)]
struct ApiParameters {
    wait_for_model: bool,
}

/// HTTP client for the HuggingFace Inference API.
///
/// Implements [`TextGenerator`] so the AI use cases stay decoupled from
/// transport and vendor details. One POST per call, no retries, no explicit
/// timeout beyond the transport defaults; `wait_for_model` is set so a
/// cold-started model holds the request open instead of erroring.
///
/// Configuration comes from the environment:
///
/// ```text
/// HUGGINGFACE_API_KEY=hf_...           (required)
/// HF_API_URL=https://...               (optional endpoint override)
/// ```
pub struct HfInferenceClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl HfInferenceClient {
    pub fn new(api_key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url: url.into(),
        }
    }

    /// Construct from environment variables. Returns `None` when
    /// `HUGGINGFACE_API_KEY` is absent.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("HUGGINGFACE_API_KEY").ok()?;
        let url = std::env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Some(Self::new(key, url))
    }

    /// Interpret a success-status response body.
    ///
    /// The API answers `[{"generated_text": "..."}]` on success and
    /// `{"error": "..."}` when the model is loading or the request was bad.
    /// An unparseable body or an error field is an upstream failure carrying
    /// the raw text as detail; a well-formed array with no `generated_text`
    /// yields the empty string (the use cases decide what that means).
    fn parse_body(body: &str) -> Result<String, DomainError> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|_| DomainError::upstream(None, body.to_string()))?;

        if let Some(error) = payload.get("error") {
            let detail = error
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(DomainError::upstream(None, detail));
        }

        Ok(payload
            .get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl TextGenerator for HfInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            inputs: prompt,
            parameters: ApiParameters {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("HfInferenceClient: request failed: {e}");
                DomainError::upstream(None, format!("request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::upstream(
                Some(status.as_u16()),
                format!("failed to read response body: {e}"),
            )
        })?;
        debug!("HfInferenceClient raw response ({status}): {body}");

        if !status.is_success() {
            warn!("HfInferenceClient: API returned {status}: {body}");
            return Err(DomainError::upstream(Some(status.as_u16()), body));
        }

        Self::parse_body(&body)
    }
}
