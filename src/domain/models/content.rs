use serde::{Deserialize, Serialize};

/// Marketing copy produced by the content-generation proxy.
///
/// Deserialized from the first JSON object extracted out of the model's raw
/// text. Both fields default to the empty string: the extractor keeps the
/// first brace-delimited object it finds, and that object is not guaranteed
/// to carry the requested keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A single chatbot answer. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
