// src/application/ports/email.rs
use crate::application::ports::ChannelResult;
use crate::domain::user::EmailAddress;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<EmailAddress>,
}

/// Best-effort email delivery. Implementations own the sender address and
/// transport details; callers treat any `Err` as final and report it.
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, message: EmailMessage) -> ChannelResult<()>;
}
