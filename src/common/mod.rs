pub mod commands;
pub mod events;
pub mod types;

pub use commands::ReplyCommand;
pub use events::ReplyEvent;
pub use types::{Message, Sender};
