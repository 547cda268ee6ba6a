// src/infrastructure/repositories/postgres_user.rs
use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::NewsletterId;
use crate::domain::publisher::PublisherId;
use crate::domain::user::{
    DisplayName, EmailAddress, NewUser, RoleProfile, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate_profile(&self, id: i64, role: &str) -> DomainResult<RoleProfile> {
        match role {
            "reader" => {
                let publishers: Vec<(i64,)> = sqlx::query_as(
                    "SELECT publisher_id FROM publisher_subscriptions WHERE reader_id = $1",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;
                let journalists: Vec<(i64,)> = sqlx::query_as(
                    "SELECT journalist_id FROM journalist_subscriptions WHERE reader_id = $1",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

                let subscribed_publishers = publishers
                    .into_iter()
                    .map(|(pid,)| PublisherId::new(pid))
                    .collect::<DomainResult<HashSet<_>>>()?;
                let subscribed_journalists = journalists
                    .into_iter()
                    .map(|(jid,)| UserId::new(jid))
                    .collect::<DomainResult<HashSet<_>>>()?;

                Ok(RoleProfile::Reader {
                    subscribed_publishers,
                    subscribed_journalists,
                })
            }
            "journalist" => {
                // Bylines are derived from the content tables.
                let articles: Vec<(i64,)> =
                    sqlx::query_as("SELECT id FROM articles WHERE author_id = $1")
                        .bind(id)
                        .fetch_all(&self.pool)
                        .await
                        .map_err(map_sqlx)?;
                let newsletters: Vec<(i64,)> =
                    sqlx::query_as("SELECT id FROM newsletters WHERE author_id = $1")
                        .bind(id)
                        .fetch_all(&self.pool)
                        .await
                        .map_err(map_sqlx)?;

                let published_articles = articles
                    .into_iter()
                    .map(|(aid,)| ArticleId::new(aid))
                    .collect::<DomainResult<HashSet<_>>>()?;
                let published_newsletters = newsletters
                    .into_iter()
                    .map(|(nid,)| NewsletterId::new(nid))
                    .collect::<DomainResult<HashSet<_>>>()?;

                Ok(RoleProfile::Journalist {
                    published_articles,
                    published_newsletters,
                })
            }
            "editor" => Ok(RoleProfile::Editor),
            other => Err(DomainError::Persistence(format!(
                "unknown role in users table: {other}"
            ))),
        }
    }

    async fn row_to_user(&self, row: UserRow) -> DomainResult<User> {
        let profile = self.hydrate_profile(row.id, &row.role).await?;
        build_user(row, profile)
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    display_name: Option<String>,
    email: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

fn build_user(row: UserRow, profile: RoleProfile) -> DomainResult<User> {
    Ok(User {
        id: UserId::new(row.id)?,
        username: Username::new(row.username)?,
        display_name: row.display_name.map(DisplayName::new).transpose()?,
        email: row.email.map(EmailAddress::new).transpose()?,
        profile,
        created_at: row.created_at,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let role = new_user.profile.role_name();
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, display_name, email, role, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, username, display_name, email, role, created_at",
        )
        .bind(new_user.username.as_str())
        .bind(new_user.display_name.as_ref().map(DisplayName::as_str))
        .bind(new_user.email.as_ref().map(EmailAddress::as_str))
        .bind(role)
        .bind(new_user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        build_user(row, new_user.profile)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, display_name, email, role, created_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.row_to_user(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, display_name, email, role, created_at
             FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.row_to_user(row).await?)),
            None => Ok(None),
        }
    }

    async fn replace_profile(&self, id: UserId, profile: RoleProfile) -> DomainResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query("UPDATE users SET role = $1 WHERE id = $2")
            .bind(profile.role_name())
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        // Rows for the abandoned role are unreachable through the new
        // variant; remove them so the tables stay consistent with it.
        if !matches!(profile, RoleProfile::Reader { .. }) {
            sqlx::query("DELETE FROM publisher_subscriptions WHERE reader_id = $1")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            sqlx::query("DELETE FROM journalist_subscriptions WHERE reader_id = $1")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn subscribe_to_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_subscriptions (reader_id, publisher_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader))
        .bind(i64::from(publisher))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn subscribe_to_journalist(
        &self,
        reader: UserId,
        journalist: UserId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO journalist_subscriptions (reader_id, journalist_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader))
        .bind(i64::from(journalist))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn subscribers_of_publisher(&self, publisher: PublisherId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.username, u.display_name, u.email, u.role, u.created_at
             FROM users u
             JOIN publisher_subscriptions s ON s.reader_id = u.id
             WHERE s.publisher_id = $1",
        )
        .bind(i64::from(publisher))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // Audience delivery needs identity and address only; subscription
        // sets are not hydrated for bulk reads.
        rows.into_iter()
            .map(|row| build_user(row, RoleProfile::reader()))
            .collect()
    }

    async fn followers_of_journalist(&self, journalist: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.username, u.display_name, u.email, u.role, u.created_at
             FROM users u
             JOIN journalist_subscriptions s ON s.reader_id = u.id
             WHERE s.journalist_id = $1",
        )
        .bind(i64::from(journalist))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| build_user(row, RoleProfile::reader()))
            .collect()
    }
}
