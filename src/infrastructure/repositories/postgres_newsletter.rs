// src/infrastructure/repositories/postgres_newsletter.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{
    NewNewsletter, Newsletter, NewsletterBody, NewsletterId, NewsletterRepository,
    NewsletterTitle, NewsletterUpdate,
};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NEWSLETTER_COLUMNS: &str =
    "id, title, body, approved, approved_at, publisher_id, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRow {
    id: i64,
    title: String,
    body: String,
    approved: bool,
    approved_at: Option<DateTime<Utc>>,
    publisher_id: Option<i64>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsletterRow> for Newsletter {
    type Error = DomainError;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        Ok(Newsletter {
            id: NewsletterId::new(row.id)?,
            title: NewsletterTitle::new(row.title)?,
            body: NewsletterBody::new(row.body)?,
            approved: row.approved,
            approved_at: row.approved_at,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let NewNewsletter {
            title,
            body,
            publisher_id,
            author_id,
            created_at,
            updated_at,
        } = newsletter;

        let row = sqlx::query_as::<_, NewsletterRow>(
            "INSERT INTO newsletters (title, body, approved, publisher_id, author_id, created_at, updated_at)
             VALUES ($1, $2, FALSE, $3, $4, $5, $6)
             RETURNING id, title, body, approved, approved_at, publisher_id, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(publisher_id.map(i64::from))
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Newsletter::try_from(row)
    }

    async fn update_approval(&self, update: NewsletterUpdate) -> DomainResult<Newsletter> {
        let row = sqlx::query_as::<_, NewsletterRow>(
            "UPDATE newsletters
             SET approved = $1, approved_at = $2, updated_at = $3
             WHERE id = $4 AND updated_at = $5
             RETURNING id, title, body, approved, approved_at, publisher_id, author_id, created_at, updated_at",
        )
        .bind(update.approved)
        .bind(update.approved_at)
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .bind(update.original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Newsletter::try_from(row),
            None => Err(DomainError::Conflict(
                "newsletter was modified concurrently".into(),
            )),
        }
    }

    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>> {
        let row = sqlx::query_as::<_, NewsletterRow>(&format!(
            "SELECT {NEWSLETTER_COLUMNS} FROM newsletters WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Newsletter::try_from).transpose()
    }

    async fn list(&self, include_unapproved: bool) -> DomainResult<Vec<Newsletter>> {
        let query = if include_unapproved {
            format!("SELECT {NEWSLETTER_COLUMNS} FROM newsletters ORDER BY created_at DESC")
        } else {
            format!(
                "SELECT {NEWSLETTER_COLUMNS} FROM newsletters WHERE approved ORDER BY created_at DESC"
            )
        };

        let rows = sqlx::query_as::<_, NewsletterRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Newsletter::try_from).collect()
    }
}
