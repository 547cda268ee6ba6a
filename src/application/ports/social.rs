// src/application/ports/social.rs
use crate::application::ports::ChannelResult;
use async_trait::async_trait;

/// Best-effort posting to an external social feed. No retry: a failed post
/// is a final, reported outcome.
#[async_trait]
pub trait SocialChannel: Send + Sync {
    async fn post(&self, text: &str) -> ChannelResult<()>;
}
