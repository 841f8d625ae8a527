use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::network::{ReplyError, ReplyService};

type Outcome = Result<String, ReplyError>;

/// In-memory `ReplyService` for tests.
///
/// Prompts without a script are echoed back as `echo: <prompt>`. A held
/// prompt stays pending until the test resolves it through the returned
/// sender.
#[derive(Default)]
pub struct ScriptedService {
    held: Mutex<HashMap<String, oneshot::Receiver<Outcome>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn hold(&self, prompt: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(prompt.to_string(), rx);
        tx
    }

    pub fn fail(&self, prompt: &str, err: ReplyError) {
        let tx = self.hold(prompt);
        let _ = tx.send(Err(err));
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyService for ScriptedService {
    async fn send_prompt(&self, prompt: &str, user_id: &str) -> Result<String, ReplyError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), user_id.to_string()));

        let held = self.held.lock().unwrap().remove(prompt);
        match held {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ReplyError::WorkerUnavailable("script dropped".into()))),
            None => Ok(format!("echo: {prompt}")),
        }
    }
}
