// src/domain/newsletter/entity.rs
use crate::domain::newsletter::value_objects::{NewsletterBody, NewsletterId, NewsletterTitle};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A newsletter issue. Shares the editor-approval lifecycle with articles:
/// only the `false -> true` edge of `approved` is notified.
#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: NewsletterTitle,
    pub body: NewsletterBody,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub publisher_id: Option<PublisherId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Newsletter {
    pub fn approve(&mut self, now: DateTime<Utc>) {
        self.approved = true;
        self.approved_at = Some(now);
        self.updated_at = now;
    }

    pub fn retract(&mut self, now: DateTime<Utc>) {
        self.approved = false;
        self.approved_at = None;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: NewsletterTitle,
    pub body: NewsletterBody,
    pub publisher_id: Option<PublisherId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Approval-state update with the same compare-and-swap guard as articles.
#[derive(Debug, Clone)]
pub struct NewsletterUpdate {
    pub id: NewsletterId,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
