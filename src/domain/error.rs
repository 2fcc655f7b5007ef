use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: {detail}")]
    UpstreamError {
        /// HTTP status returned by the external model, when one was received.
        status: Option<u16>,
        detail: String,
    },

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Model returned an empty reply")]
    EmptyReply,
}

impl DomainError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn upstream(status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::UpstreamError {
            status,
            detail: detail.into(),
        }
    }

    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::ExtractionError(msg.into())
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    pub fn is_upstream_error(&self) -> bool {
        matches!(self, Self::UpstreamError { .. })
    }

    pub fn is_extraction_error(&self) -> bool {
        matches!(self, Self::ExtractionError(_))
    }
}
