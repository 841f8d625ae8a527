use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::service::{ReplyError, ReplyService};

#[derive(Serialize)]
struct PromptRequest<'a> {
    user_prompt: &'a str,
    user_id: &'a str,
}

/// Shape the reply endpoint uses for non-2xx bodies.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// `ReplyService` backed by a JSON-over-POST reply endpoint.
#[derive(Clone)]
pub struct HttpReplyService {
    client: Client,
    endpoint: Url,
}

impl HttpReplyService {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ReplyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReplyService for HttpReplyService {
    async fn send_prompt(&self, prompt: &str, user_id: &str) -> Result<String, ReplyError> {
        let request = PromptRequest {
            user_prompt: prompt,
            user_id,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error) => error.error,
                Err(_) => body,
            };
            return Err(ReplyError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        parsed
            .get("ai_reply")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ReplyError::MissingReply)
    }
}
