use async_trait::async_trait;

/// Anything that can turn a prompt into reply text.
#[async_trait]
pub trait ReplyService: Send + Sync {
    async fn send_prompt(&self, prompt: &str, user_id: &str) -> Result<String, ReplyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("response body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response has no `ai_reply` field")]
    MissingReply,
    #[error("reply worker unavailable: {0}")]
    WorkerUnavailable(String),
}
