use egui::Key;
use tokio::sync::mpsc;

use crate::common::{Message, ReplyCommand, ReplyEvent};
use crate::network::ReplyError;

use super::state::ConversationState;

/// Owns the conversation and orchestrates sending prompts.
///
/// Replies are appended to the message list as it stands when they arrive,
/// so overlapping submissions never drop each other's messages.
pub struct ConversationView {
    state: ConversationState,
    command_sender: mpsc::Sender<ReplyCommand>,
    event_receiver: mpsc::Receiver<ReplyEvent>,
    error_message: String,
}

impl ConversationView {
    pub fn new(
        command_sender: mpsc::Sender<ReplyCommand>,
        event_receiver: mpsc::Receiver<ReplyEvent>,
        error_message: String,
    ) -> Self {
        Self {
            state: ConversationState::new(),
            command_sender,
            event_receiver,
            error_message,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub fn update_draft(&mut self, text: String) {
        self.state.draft = text;
    }

    pub fn submit(&mut self) {
        let Some(prompt) = self.state.take_draft() else {
            return;
        };

        if let Err(err) = self
            .command_sender
            .try_send(ReplyCommand::SendPrompt(prompt))
        {
            self.record_failure(ReplyError::WorkerUnavailable(err.to_string()));
        }
    }

    pub fn handle_key_commit(&mut self, key: Key) {
        if key == Key::Enter {
            self.submit();
        }
    }

    /// Applies every reply that has arrived since the last call.
    pub fn poll_replies(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: ReplyEvent) {
        match event {
            ReplyEvent::ReplyReceived(reply) => self.state.push_message(Message::bot(reply)),
            ReplyEvent::ReplyFailed(err) => self.record_failure(err),
        }
    }

    fn record_failure(&mut self, err: ReplyError) {
        log::error!("Error: {err}");
        self.state.push_message(Message::bot(self.error_message.clone()));
    }
}

#[cfg(test)]
impl ConversationView {
    /// Waits for the next reply and applies it.
    pub async fn next_reply(&mut self) {
        let event = self
            .event_receiver
            .recv()
            .await
            .expect("reply worker hung up");
        self.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::DEFAULT_ERROR_MESSAGE;
    use crate::network::ReplyClient;
    use crate::network::testing::ScriptedService;

    fn view_with_worker(service: Arc<ScriptedService>) -> ConversationView {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let worker = ReplyClient::new(service, "demo-user".to_string(), event_tx, cmd_rx);
        tokio::spawn(worker.run());
        ConversationView::new(cmd_tx, event_rx, DEFAULT_ERROR_MESSAGE.to_string())
    }

    #[tokio::test]
    async fn hello_gets_a_reply() {
        let service = ScriptedService::new();
        service.hold("hello").send(Ok("hi there".to_string())).unwrap();
        let mut view = view_with_worker(Arc::clone(&service));

        view.update_draft("hello".to_string());
        view.submit();
        view.next_reply().await;

        assert_eq!(
            view.messages(),
            &[Message::user("hello"), Message::bot("hi there")]
        );
        assert_eq!(view.draft(), "");
        assert_eq!(
            service.calls(),
            vec![("hello".to_string(), "demo-user".to_string())]
        );
    }

    #[tokio::test]
    async fn whitespace_draft_is_ignored() {
        let (cmd_tx, mut cmd_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        let mut view = ConversationView::new(cmd_tx, event_rx, DEFAULT_ERROR_MESSAGE.to_string());

        view.update_draft("   ".to_string());
        view.submit();

        assert!(view.messages().is_empty());
        assert_eq!(view.draft(), "   ");
        assert!(cmd_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_reply_shows_fixed_error() {
        let service = ScriptedService::new();
        service.fail(
            "ping",
            ReplyError::Status {
                status: 500,
                detail: "boom".to_string(),
            },
        );
        let mut view = view_with_worker(service);

        view.update_draft("ping".to_string());
        view.submit();
        view.next_reply().await;

        assert_eq!(
            view.messages(),
            &[Message::user("ping"), Message::bot("Error contacting server.")]
        );
    }

    #[tokio::test]
    async fn conversation_stays_usable_after_a_failure() {
        let service = ScriptedService::new();
        service.fail("first", ReplyError::MissingReply);
        let mut view = view_with_worker(service);

        view.update_draft("first".to_string());
        view.submit();
        view.next_reply().await;
        view.update_draft("second".to_string());
        view.submit();
        view.next_reply().await;

        assert_eq!(
            view.messages(),
            &[
                Message::user("first"),
                Message::bot("Error contacting server."),
                Message::user("second"),
                Message::bot("echo: second"),
            ]
        );
    }

    #[tokio::test]
    async fn untrimmed_draft_is_sent_and_shown_verbatim() {
        let service = ScriptedService::new();
        let mut view = view_with_worker(Arc::clone(&service));

        view.update_draft("  spaced out  ".to_string());
        view.submit();
        view.next_reply().await;

        assert_eq!(view.messages()[0], Message::user("  spaced out  "));
        assert_eq!(service.calls()[0].0, "  spaced out  ");
    }

    #[tokio::test]
    async fn overlapping_submissions_keep_every_message() {
        let service = ScriptedService::new();
        let release_a = service.hold("a");
        let release_b = service.hold("b");
        let mut view = view_with_worker(service);

        view.update_draft("a".to_string());
        view.submit();
        view.update_draft("b".to_string());
        view.submit();

        release_b.send(Ok("reply b".to_string())).unwrap();
        view.next_reply().await;
        release_a.send(Ok("reply a".to_string())).unwrap();
        view.next_reply().await;

        assert_eq!(
            view.messages(),
            &[
                Message::user("a"),
                Message::user("b"),
                Message::bot("reply b"),
                Message::bot("reply a"),
            ]
        );
    }

    #[tokio::test]
    async fn enter_submits_and_other_keys_do_not() {
        let (cmd_tx, mut cmd_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        let mut view = ConversationView::new(cmd_tx, event_rx, DEFAULT_ERROR_MESSAGE.to_string());

        view.update_draft("hi".to_string());
        view.handle_key_commit(Key::Space);
        view.handle_key_commit(Key::Tab);
        assert!(view.messages().is_empty());
        assert!(cmd_rx.try_recv().is_err());

        view.handle_key_commit(Key::Enter);
        assert_eq!(view.messages(), &[Message::user("hi")]);
        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            ReplyCommand::SendPrompt("hi".to_string())
        );
    }

    #[tokio::test]
    async fn missing_worker_yields_error_message() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        drop(cmd_rx);
        let mut view = ConversationView::new(cmd_tx, event_rx, "offline".to_string());

        view.update_draft("anyone?".to_string());
        view.submit();

        assert_eq!(
            view.messages(),
            &[Message::user("anyone?"), Message::bot("offline")]
        );
    }

    #[tokio::test]
    async fn poll_replies_drains_without_blocking() {
        let (cmd_tx, _cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let mut view = ConversationView::new(cmd_tx, event_rx, DEFAULT_ERROR_MESSAGE.to_string());

        assert_eq!(view.poll_replies(), 0);

        event_tx
            .send(ReplyEvent::ReplyReceived("one".to_string()))
            .await
            .unwrap();
        event_tx
            .send(ReplyEvent::ReplyFailed(ReplyError::MissingReply))
            .await
            .unwrap();

        assert_eq!(view.poll_replies(), 2);
        assert_eq!(
            view.messages(),
            &[Message::bot("one"), Message::bot("Error contacting server.")]
        );
    }
}
