pub mod client;
pub mod http;
pub mod service;
#[cfg(test)]
pub mod testing;

pub use client::ReplyClient;
pub use http::HttpReplyService;
pub use service::{ReplyError, ReplyService};
