use crate::domain::newsletter::Newsletter;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub publisher_id: Option<i64>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Newsletter> for NewsletterDto {
    fn from(newsletter: Newsletter) -> Self {
        Self {
            id: newsletter.id.into(),
            title: newsletter.title.into(),
            body: newsletter.body.into(),
            approved: newsletter.approved,
            approved_at: newsletter.approved_at,
            publisher_id: newsletter.publisher_id.map(i64::from),
            author_id: newsletter.author_id.into(),
            created_at: newsletter.created_at,
            updated_at: newsletter.updated_at,
        }
    }
}
