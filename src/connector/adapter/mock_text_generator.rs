use async_trait::async_trait;

use crate::application::TextGenerator;
use crate::domain::DomainError;

/// Completion that satisfies both AI use cases: the generation proxy finds a
/// JSON object in it, the chat proxy finds non-empty text after the echoed
/// prompt.
const DEFAULT_COMPLETION: &str =
    r#" {"title": "Sample Title", "description": "A sample description for local development."}"#;

/// A [`TextGenerator`] with canned output for offline development
/// (`--mock-model`) and tests.
///
/// Mirrors the echo behavior of hosted completion models: the response is
/// the prompt followed by the configured completion.
pub struct MockTextGenerator {
    completion: String,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            completion: DEFAULT_COMPLETION.to_string(),
        }
    }

    pub fn with_completion(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
        }
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        Ok(format!("{prompt}{}", self.completion))
    }
}
