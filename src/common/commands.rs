/// Commands the UI hands to the reply worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyCommand {
    /// Raw, untrimmed draft text to forward to the reply endpoint.
    SendPrompt(String),
}
