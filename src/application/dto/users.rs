use crate::domain::user::{RoleProfile, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: &'static str,
    pub subscribed_publishers: Vec<i64>,
    pub subscribed_journalists: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let role = user.profile.role_name();
        let (subscribed_publishers, subscribed_journalists) = match &user.profile {
            RoleProfile::Reader {
                subscribed_publishers,
                subscribed_journalists,
            } => (
                subscribed_publishers.iter().copied().map(i64::from).collect(),
                subscribed_journalists.iter().copied().map(i64::from).collect(),
            ),
            _ => (Vec::new(), Vec::new()),
        };

        Self {
            id: user.id.into(),
            username: user.username.as_str().to_string(),
            display_name: user.display_name.map(|name| name.as_str().to_string()),
            email: user.email.map(String::from),
            role,
            subscribed_publishers,
            subscribed_journalists,
            created_at: user.created_at,
        }
    }
}
