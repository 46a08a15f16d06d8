use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a remote text generation call. Callers recover from all
/// of them by falling back to a local strategy.
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("generation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("http error: {0}")]
    Http(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("service returned no text")]
    EmptyResponse,
    #[error("no credential configured")]
    MissingCredential,
}

#[async_trait]
pub trait GenerativeService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CloudError>;

    /// Short label used in logs and provenance tags.
    fn name(&self) -> &str;
}
