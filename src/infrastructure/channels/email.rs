// src/infrastructure/channels/email.rs
use crate::application::ports::email::{EmailChannel, EmailMessage};
use crate::application::ports::{ChannelError, ChannelResult};
use crate::domain::user::EmailAddress;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Email delivery through a transactional-mail HTTP API. The request
/// timeout bounds how long a slow mail provider can hold up the
/// triggering approval request.
pub struct RestEmailChannel {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
    sender: EmailAddress,
}

impl RestEmailChannel {
    pub fn new(
        api_url: impl Into<String>,
        api_token: impl Into<String>,
        sender: EmailAddress,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
            sender,
        })
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text_body: &'a str,
}

#[async_trait]
impl EmailChannel for RestEmailChannel {
    async fn send(&self, message: EmailMessage) -> ChannelResult<()> {
        let payload = SendEmailRequest {
            from: self.sender.as_str(),
            to: message
                .recipients
                .iter()
                .map(EmailAddress::as_str)
                .collect(),
            subject: &message.subject,
            text_body: &message.body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("X-Server-Token", &self.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(ChannelError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}
