use crate::network::ReplyError;

/// Outcome of one prompt, sent from the reply worker back to the UI.
#[derive(Debug)]
pub enum ReplyEvent {
    ReplyReceived(String),
    ReplyFailed(ReplyError),
}
