use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a prompt to a hosted text-generation model and
/// receiving the generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details: consumers (the content-generation and chat use cases) see
/// only the raw generated text or a [`DomainError::UpstreamError`]. The
/// returned text is whatever the model produced, typically the echoed
/// prompt followed by a continuation. It is NOT guaranteed to be valid
/// JSON or any fixed format; extraction is the caller's job.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the model's generated text.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
