// src/domain/user/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::newsletter::NewsletterId;
use crate::domain::publisher::PublisherId;
use crate::domain::user::value_objects::{DisplayName, EmailAddress, UserId, Username};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Role-specific relationship sets as a tagged variant. Switching role
/// replaces the whole variant, so subscriptions and bylines can never
/// coexist on the wrong role and nothing needs to be cleared by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Reader {
        subscribed_publishers: HashSet<PublisherId>,
        subscribed_journalists: HashSet<UserId>,
    },
    Journalist {
        published_articles: HashSet<ArticleId>,
        published_newsletters: HashSet<NewsletterId>,
    },
    Editor,
}

impl RoleProfile {
    pub fn reader() -> Self {
        Self::Reader {
            subscribed_publishers: HashSet::new(),
            subscribed_journalists: HashSet::new(),
        }
    }

    pub fn journalist() -> Self {
        Self::Journalist {
            published_articles: HashSet::new(),
            published_newsletters: HashSet::new(),
        }
    }

    pub fn role_name(&self) -> &'static str {
        match self {
            Self::Reader { .. } => "reader",
            Self::Journalist { .. } => "journalist",
            Self::Editor => "editor",
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub display_name: Option<DisplayName>,
    pub email: Option<EmailAddress>,
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name shown in notifications, falling back to the username.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_ref()
            .map_or(self.username.as_str(), DisplayName::as_str)
    }

    pub fn change_role(&mut self, profile: RoleProfile) {
        self.profile = profile;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub display_name: Option<DisplayName>,
    pub email: Option<EmailAddress>,
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(id: i64) -> User {
        User {
            id: UserId::new(id).unwrap(),
            username: Username::new(format!("user{id}")).unwrap(),
            display_name: None,
            email: None,
            profile: RoleProfile::reader(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_label_falls_back_to_username() {
        let mut user = reader(1);
        assert_eq!(user.display_label(), "user1");
        user.display_name = Some(DisplayName::new("Jane Doe").unwrap());
        assert_eq!(user.display_label(), "Jane Doe");
    }

    #[test]
    fn changing_role_drops_other_roles_relations() {
        let mut user = reader(1);
        if let RoleProfile::Reader {
            subscribed_publishers,
            ..
        } = &mut user.profile
        {
            subscribed_publishers.insert(PublisherId::new(7).unwrap());
        }

        user.change_role(RoleProfile::journalist());
        match &user.profile {
            RoleProfile::Journalist {
                published_articles,
                published_newsletters,
            } => {
                assert!(published_articles.is_empty());
                assert!(published_newsletters.is_empty());
            }
            other => panic!("expected journalist profile, got {other:?}"),
        }

        // Subscriptions from the reader era are gone with the old variant.
        user.change_role(RoleProfile::reader());
        match &user.profile {
            RoleProfile::Reader {
                subscribed_publishers,
                subscribed_journalists,
            } => {
                assert!(subscribed_publishers.is_empty());
                assert!(subscribed_journalists.is_empty());
            }
            other => panic!("expected reader profile, got {other:?}"),
        }
    }
}
