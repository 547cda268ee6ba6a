//! Approval-driven notification fan-out.
//!
//! When a content item crosses the `approved: false -> true` edge, the
//! [`ApprovalNotifier`] resolves the audience (subscribers of the item's
//! publisher united with followers of its author) and dispatches to the
//! email channel and, when configured, the social-post channel. Channel
//! failures are absorbed here; the triggering update never sees them.

pub mod audience;
pub mod message;
mod notifier;

pub use audience::Audience;
pub use notifier::{ApprovalNotifier, ChannelOutcome, DispatchReport, NotifierSettings};

use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Article,
    Newsletter,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Newsletter => "Newsletter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorRef {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PublisherRef {
    pub id: PublisherId,
    pub name: String,
}

/// Channel-agnostic view of a just-persisted content item, built by the
/// command service after the update has committed.
#[derive(Debug, Clone)]
pub struct ContentNotice {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub author: AuthorRef,
    pub publisher: Option<PublisherRef>,
}
