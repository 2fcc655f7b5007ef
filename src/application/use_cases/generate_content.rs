use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::{DomainError, GeneratedContent};

/// Drafts marketing copy for a product by prompting the external model and
/// extracting a `{title, description}` JSON object out of its raw text.
///
/// The model is instructed to emit a single JSON object and nothing else,
/// but offers no such guarantee; extraction therefore tolerates leading and
/// trailing prose and keeps the FIRST minimal brace-delimited group. See
/// [`extract_json`] for the exact (and deliberately unstrengthened)
/// matching rule.
pub struct GenerateContentUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl GenerateContentUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        product_name: &str,
        keywords: &str,
        tone: &str,
    ) -> Result<GeneratedContent, DomainError> {
        let prompt = build_prompt(product_name, keywords, tone);
        let text = self.generator.generate(&prompt).await?;
        debug!("content generation raw model output: {text}");

        let object = extract_json(&text)?;
        serde_json::from_value(object)
            .map_err(|e| DomainError::extraction(format!("extracted object is unusable: {e}")))
    }
}

fn build_prompt(product_name: &str, keywords: &str, tone: &str) -> String {
    format!(
        "Task: Generate SEO-optimized content for an e-commerce product.\n\
         Product Name: \"{product_name}\"\n\
         Keywords: \"{keywords}\"\n\
         Tone: \"{tone}\"\n\
         Instructions: Your output MUST be a single, valid JSON object with two keys: \
         \"title\" (a short, catchy title) and \"description\" (a compelling 2-3 line \
         description). Do not include any text before or after the JSON object.\n"
    )
}

/// Extract the first minimal brace-delimited JSON object from `text`.
///
/// The slice runs from the first `{` to the first `}` that follows it,
/// matching a non-greedy `\{[\s\S]*?\}` scan. Nested objects and multiple
/// concatenated objects are therefore mishandled on purpose: picking the
/// first well-formed-looking group is the compatible behavior, a greedy
/// match would capture trailing garbage. Known limitation, kept as is.
fn extract_json(text: &str) -> Result<Value, DomainError> {
    let start = text
        .find('{')
        .ok_or_else(|| DomainError::extraction("no JSON object found in model output"))?;
    let end = text[start..]
        .find('}')
        .map(|offset| start + offset)
        .ok_or_else(|| DomainError::extraction("no JSON object found in model output"))?;

    serde_json::from_str(&text[start..=end])
        .map_err(|e| DomainError::extraction(format!("failed to parse extracted JSON: {e}")))
}
