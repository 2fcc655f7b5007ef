use std::sync::Arc;

use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::{ChatReply, DomainError};

/// The phrase that closes the chat prompt. The model echoes the prompt back
/// in front of its continuation, so the reply is whatever follows the LAST
/// occurrence of this marker in the generated text.
pub const DEFAULT_REPLY_MARKER: &str = "actionable marketing tip.";

/// Answers marketing questions about a product through the external model.
///
/// Splitting on the last marker occurrence assumes the model does not itself
/// repeat the phrase verbatim inside its answer; if it does, the leading part
/// of the answer is lost. Accepted risk.
pub struct MarketingChatUseCase {
    generator: Arc<dyn TextGenerator>,
    reply_marker: String,
}

impl MarketingChatUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            reply_marker: DEFAULT_REPLY_MARKER.to_string(),
        }
    }

    /// Override the reply marker. The prompt itself keeps ending with
    /// [`DEFAULT_REPLY_MARKER`]; this hook exists so tests can exercise the
    /// split against a substitute phrase.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.reply_marker = marker.into();
        self
    }

    pub async fn execute(
        &self,
        product_name: &str,
        message: &str,
    ) -> Result<ChatReply, DomainError> {
        let prompt = build_prompt(product_name, message);
        let text = self.generator.generate(&prompt).await?;
        debug!("chat raw model output: {text}");

        let reply = extract_reply(&text, &self.reply_marker);
        if reply.is_empty() {
            return Err(DomainError::EmptyReply);
        }

        Ok(ChatReply {
            reply: reply.to_string(),
        })
    }
}

fn build_prompt(product_name: &str, message: &str) -> String {
    format!(
        "You are a helpful marketing expert chatbot. A user needs a marketing strategy \
         for their product: \"{product_name}\".\n\
         User's question: \"{message}\"\n\
         Provide a concise, {DEFAULT_REPLY_MARKER}"
    )
}

/// Everything after the last occurrence of `marker`, trimmed. When the
/// marker is absent the whole trimmed text is returned.
fn extract_reply<'a>(text: &'a str, marker: &str) -> &'a str {
    text.rsplit(marker).next().unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Ok(self.0.clone())
        }
    }

    /// Echoes the prompt and appends a continuation, like a real completion.
    struct EchoGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
            Ok(format!("{prompt}{}", self.0))
        }
    }

    #[test]
    fn reply_is_text_after_marker() {
        let text = "blah blah Provide a concise, actionable marketing tip. Try bundling products.";
        assert_eq!(
            extract_reply(text, DEFAULT_REPLY_MARKER),
            "Try bundling products."
        );
    }

    #[test]
    fn last_marker_occurrence_wins() {
        let text = "actionable marketing tip. echoed actionable marketing tip. the real answer";
        assert_eq!(extract_reply(text, DEFAULT_REPLY_MARKER), "the real answer");
    }

    #[test]
    fn absent_marker_returns_whole_text() {
        assert_eq!(
            extract_reply("  a bare answer with no echo  ", DEFAULT_REPLY_MARKER),
            "a bare answer with no echo"
        );
    }

    #[test]
    fn prompt_ends_with_the_marker_phrase() {
        let prompt = build_prompt("Trail Bottle", "how do I launch?");
        assert!(prompt.ends_with(DEFAULT_REPLY_MARKER));
        assert!(prompt.contains("\"Trail Bottle\""));
        assert!(prompt.contains("\"how do I launch?\""));
    }

    #[tokio::test]
    async fn execute_strips_the_echoed_prompt() {
        let use_case =
            MarketingChatUseCase::new(Arc::new(EchoGenerator(" Lean into referral codes.")));

        let reply = use_case
            .execute("Trail Bottle", "how do I grow sales?")
            .await
            .expect("chat");
        assert_eq!(reply.reply, "Lean into referral codes.");
    }

    #[tokio::test]
    async fn text_ending_at_marker_is_an_empty_reply() {
        // The model echoed the prompt and produced nothing after it.
        let use_case = MarketingChatUseCase::new(Arc::new(EchoGenerator("")));

        let err = use_case
            .execute("Trail Bottle", "anything")
            .await
            .expect_err("empty");
        assert!(matches!(err, DomainError::EmptyReply));
    }

    #[tokio::test]
    async fn substitute_marker_is_honored() {
        let use_case = MarketingChatUseCase::new(Arc::new(CannedGenerator(
            "intro THE CUT the part we keep".to_string(),
        )))
        .with_marker("THE CUT");

        let reply = use_case
            .execute("Trail Bottle", "anything")
            .await
            .expect("chat");
        assert_eq!(reply.reply, "the part we keep");
    }
}
