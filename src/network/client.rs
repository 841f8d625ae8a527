use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{ReplyCommand, ReplyEvent};

use super::service::ReplyService;

/// Background worker bridging the UI thread and the reply endpoint.
///
/// Every prompt is handled in its own task, so a slow reply never holds up
/// the next one. Results travel back over `event_sender` in completion order.
pub struct ReplyClient {
    service: Arc<dyn ReplyService>,
    user_id: String,
    event_sender: mpsc::Sender<ReplyEvent>,
    command_receiver: mpsc::Receiver<ReplyCommand>,
    dispatched: u64,
}

impl ReplyClient {
    pub fn new(
        service: Arc<dyn ReplyService>,
        user_id: String,
        event_sender: mpsc::Sender<ReplyEvent>,
        command_receiver: mpsc::Receiver<ReplyCommand>,
    ) -> Self {
        Self {
            service,
            user_id,
            event_sender,
            command_receiver,
            dispatched: 0,
        }
    }

    pub async fn run(mut self) {
        log::info!("Reply worker started for user `{}`", self.user_id);

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Command channel closed; reply worker stopping");
    }

    fn handle_command(&mut self, command: ReplyCommand) {
        match command {
            ReplyCommand::SendPrompt(prompt) => self.dispatch(prompt),
        }
    }

    fn dispatch(&mut self, prompt: String) {
        self.dispatched += 1;
        let request_no = self.dispatched;
        let service = Arc::clone(&self.service);
        let user_id = self.user_id.clone();
        let event_sender = self.event_sender.clone();

        log::info!("Dispatching prompt #{request_no} ({} bytes)", prompt.len());

        // No cancellation: the request runs to completion even if the UI is gone.
        tokio::spawn(async move {
            let event = match service.send_prompt(&prompt, &user_id).await {
                Ok(reply) => {
                    log::debug!("Prompt #{request_no} answered");
                    ReplyEvent::ReplyReceived(reply)
                }
                Err(err) => ReplyEvent::ReplyFailed(err),
            };

            if let Err(err) = event_sender.send(event).await {
                log::warn!("Dropping result of prompt #{request_no}; UI is gone: {err}");
            }
        });
    }
}
