// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A news article. `approved` is the editor-approval flag; the
/// `false -> true` edge is the only transition observed by the
/// notification pipeline.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub publisher_id: Option<PublisherId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
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

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub publisher_id: Option<PublisherId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ApprovalStateUpdate {
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
}

/// Partial update with optimistic concurrency: the store applies it only if
/// the row's `updated_at` still equals `original_updated_at`, so two racing
/// approvals cannot both observe the same before-state.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub approval_state: Option<ApprovalStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            approval_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_approval_state(
        mut self,
        approved: bool,
        approved_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.approval_state = Some(ApprovalStateUpdate {
            approved,
            approved_at,
        });
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            approved: false,
            approved_at: None,
            publisher_id: Some(PublisherId::new(1).unwrap()),
            author_id: UserId::new(1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn approve_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(now);
        assert!(article.approved);
        assert_eq!(article.approved_at, Some(now));
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn retract_clears_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(now);
        let later = now + chrono::Duration::seconds(10);
        article.retract(later);
        assert!(!article.approved);
        assert!(article.approved_at.is_none());
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = sample_article();
        let now = Utc::now();
        let title = ArticleTitle::new("new title").unwrap();
        let body = ArticleBody::new("new body").unwrap();
        article.set_content(title.clone(), body.clone(), now);
        assert_eq!(article.title.as_str(), title.as_str());
        assert_eq!(article.body.as_str(), body.as_str());
        assert_eq!(article.updated_at, now);
    }
}
