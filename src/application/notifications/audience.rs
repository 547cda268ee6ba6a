// src/application/notifications/audience.rs
use crate::domain::user::{EmailAddress, User, UserId};
use std::collections::HashSet;

/// The deduplicated set of readers eligible for one notification event.
#[derive(Debug, Clone, Default)]
pub struct Audience {
    readers: Vec<User>,
}

impl Audience {
    /// Union of publisher subscribers and journalist followers,
    /// deduplicated by user id. A reader subscribed to both appears once.
    /// Iteration order carries no meaning.
    pub fn merge(publisher_subscribers: Vec<User>, journalist_followers: Vec<User>) -> Self {
        let mut seen: HashSet<UserId> = HashSet::new();
        let mut readers = Vec::new();
        for reader in publisher_subscribers
            .into_iter()
            .chain(journalist_followers)
        {
            if seen.insert(reader.id) {
                readers.push(reader);
            }
        }
        Self { readers }
    }

    pub fn size(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Addresses for the email channel. Readers without an email address
    /// stay in the audience but are excluded here.
    pub fn email_recipients(&self) -> Vec<EmailAddress> {
        self.readers
            .iter()
            .filter_map(|reader| reader.email.clone())
            .collect()
    }

    pub fn readers(&self) -> &[User] {
        &self.readers
    }
}
