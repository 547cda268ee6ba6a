// src/application/notifications/notifier.rs
use std::sync::Arc;

use crate::application::notifications::{audience::Audience, message, ContentNotice, PublisherRef};
use crate::application::ports::email::{EmailChannel, EmailMessage};
use crate::application::ports::social::SocialChannel;
use crate::domain::user::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct NotifierSettings {
    /// Character budget for the social post's body excerpt.
    pub social_excerpt_chars: usize,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            social_excerpt_chars: 240,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Delivered,
    Skipped(&'static str),
    Failed,
}

/// What happened to one saved-content event. Purely observational: the
/// caller's update has already committed whatever this says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    /// Not a `false -> true` approval edge; nothing to do.
    NotAnApprovalEdge,
    /// The item has no publisher; handled skip.
    MissingPublisher,
    /// Audience lookup failed; nothing was dispatched.
    AudienceUnavailable,
    Dispatched {
        audience_size: usize,
        email: ChannelOutcome,
        social: ChannelOutcome,
    },
}

/// Observes content saves and fans out notifications on the approval edge.
///
/// Holds no mutable state. Channel failures are caught and logged here,
/// never returned: approving an item always succeeds from the caller's
/// perspective regardless of delivery outcomes.
pub struct ApprovalNotifier {
    users: Arc<dyn UserRepository>,
    email: Arc<dyn EmailChannel>,
    /// `None` means social posting is disabled (flag off or credentials
    /// incomplete); resolved once at wiring time, not from ambient state.
    social: Option<Arc<dyn SocialChannel>>,
    settings: NotifierSettings,
}

impl ApprovalNotifier {
    pub fn new(
        users: Arc<dyn UserRepository>,
        email: Arc<dyn EmailChannel>,
        social: Option<Arc<dyn SocialChannel>>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            users,
            email,
            social,
            settings,
        }
    }

    /// Post-update hook. `before_approved` must come from the same state the
    /// store compared against when persisting (the command services read the
    /// row they CAS on), so a given edge is observed at most once.
    pub async fn handle_saved(
        &self,
        before_approved: bool,
        after_approved: bool,
        notice: &ContentNotice,
    ) -> DispatchReport {
        // Edge-triggered: only false -> true fires. Re-saves of approved
        // items and retractions are silent non-events.
        if before_approved || !after_approved {
            return DispatchReport::NotAnApprovalEdge;
        }

        let Some(publisher) = notice.publisher.as_ref() else {
            tracing::warn!(
                title = %notice.title,
                "notification skipped: content has no publisher"
            );
            return DispatchReport::MissingPublisher;
        };

        let audience = match self.resolve_audience(notice, publisher).await {
            Some(audience) => audience,
            None => return DispatchReport::AudienceUnavailable,
        };

        // The two channels are independent: neither outcome gates the other.
        let email = self.deliver_email(notice, publisher, &audience).await;
        let social = self.deliver_social(notice).await;

        tracing::info!(
            title = %notice.title,
            audience = audience.size(),
            email = ?email,
            social = ?social,
            "approval notification dispatched"
        );

        DispatchReport::Dispatched {
            audience_size: audience.size(),
            email,
            social,
        }
    }

    async fn resolve_audience(
        &self,
        notice: &ContentNotice,
        publisher: &PublisherRef,
    ) -> Option<Audience> {
        let publisher_subscribers = match self.users.subscribers_of_publisher(publisher.id).await {
            Ok(readers) => readers,
            Err(err) => {
                tracing::error!(error = %err, "failed to load publisher subscribers");
                return None;
            }
        };
        let journalist_followers = match self.users.followers_of_journalist(notice.author.id).await
        {
            Ok(readers) => readers,
            Err(err) => {
                tracing::error!(error = %err, "failed to load journalist followers");
                return None;
            }
        };
        Some(Audience::merge(publisher_subscribers, journalist_followers))
    }

    async fn deliver_email(
        &self,
        notice: &ContentNotice,
        publisher: &PublisherRef,
        audience: &Audience,
    ) -> ChannelOutcome {
        let recipients = audience.email_recipients();
        if recipients.is_empty() {
            tracing::debug!(title = %notice.title, "no subscribers with an email address");
            return ChannelOutcome::Skipped("no recipients");
        }

        let message = EmailMessage {
            subject: message::email_subject(notice),
            body: message::email_body(notice, publisher),
            recipients,
        };

        match self.email.send(message).await {
            Ok(()) => ChannelOutcome::Delivered,
            Err(err) => {
                tracing::error!(error = %err, title = %notice.title, "email delivery failed");
                ChannelOutcome::Failed
            }
        }
    }

    async fn deliver_social(&self, notice: &ContentNotice) -> ChannelOutcome {
        let Some(channel) = self.social.as_ref() else {
            tracing::debug!("social posting disabled");
            return ChannelOutcome::Skipped("social posting disabled");
        };

        let text = message::social_text(notice, self.settings.social_excerpt_chars);
        match channel.post(&text).await {
            Ok(()) => ChannelOutcome::Delivered,
            Err(err) => {
                tracing::error!(error = %err, title = %notice.title, "social post failed");
                ChannelOutcome::Failed
            }
        }
    }
}
