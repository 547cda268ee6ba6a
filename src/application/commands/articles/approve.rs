// src/application/commands/articles/approve.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        notifications::{AuthorRef, ContentKind, ContentNotice, PublisherRef},
    },
    domain::article::{Article, ArticleId, ArticleUpdate},
};

pub struct SetApprovalCommand {
    pub id: i64,
    pub approved: bool,
}

impl ArticleCommandService {
    /// Flip the editor-approval flag. The notifier runs strictly after the
    /// update has committed; its outcome never affects this call's result.
    pub async fn set_approval(&self, command: SetApprovalCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let before_approved = article.approved;
        if before_approved == command.approved {
            // Self-transition: no write, no notification.
            return Ok(article.into());
        }

        let original_updated_at = article.updated_at;
        let now = self.clock.now();
        if command.approved {
            article.approve(now);
        } else {
            article.retract(now);
        }

        let mut update = ArticleUpdate::new(id, original_updated_at)
            .with_approval_state(article.approved, article.approved_at);
        update.set_updated_at(article.updated_at);
        let updated = self.write_repo.update(update).await?;

        if let Some(notice) = self.notice_for(&updated).await {
            self.notifier
                .handle_saved(before_approved, updated.approved, &notice)
                .await;
        }

        Ok(updated.into())
    }

    /// Collaborator lookups for the notification payload. Failures here are
    /// absorbed: the approval is already durable, so a broken lookup only
    /// costs the notification, never the update.
    async fn notice_for(&self, article: &Article) -> Option<ContentNotice> {
        let author = match self.user_repo.find_by_id(article.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::error!(article_id = i64::from(article.id), "article author missing");
                return None;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load article author");
                return None;
            }
        };

        let publisher = match article.publisher_id {
            Some(publisher_id) => match self.publisher_repo.find_by_id(publisher_id).await {
                Ok(found) => found.map(|publisher| PublisherRef {
                    id: publisher.id,
                    name: publisher.name.into(),
                }),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load article publisher");
                    return None;
                }
            },
            None => None,
        };

        Some(ContentNotice {
            kind: ContentKind::Article,
            title: article.title.as_str().to_string(),
            body: article.body.as_str().to_string(),
            author: AuthorRef {
                id: author.id,
                name: author.display_label().to_string(),
            },
            publisher,
        })
    }
}
