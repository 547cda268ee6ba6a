// src/application/commands/newsletters/approve.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        dto::NewsletterDto,
        error::{ApplicationError, ApplicationResult},
        notifications::{AuthorRef, ContentKind, ContentNotice, PublisherRef},
    },
    domain::newsletter::{Newsletter, NewsletterId, NewsletterUpdate},
};

pub struct SetNewsletterApprovalCommand {
    pub id: i64,
    pub approved: bool,
}

impl NewsletterCommandService {
    pub async fn set_approval(
        &self,
        command: SetNewsletterApprovalCommand,
    ) -> ApplicationResult<NewsletterDto> {
        let id = NewsletterId::new(command.id)?;
        let mut newsletter = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("newsletter not found"))?;

        let before_approved = newsletter.approved;
        if before_approved == command.approved {
            return Ok(newsletter.into());
        }

        let original_updated_at = newsletter.updated_at;
        let now = self.clock.now();
        if command.approved {
            newsletter.approve(now);
        } else {
            newsletter.retract(now);
        }

        let updated = self
            .repo
            .update_approval(NewsletterUpdate {
                id,
                approved: newsletter.approved,
                approved_at: newsletter.approved_at,
                original_updated_at,
                updated_at: newsletter.updated_at,
            })
            .await?;

        if let Some(notice) = self.notice_for(&updated).await {
            self.notifier
                .handle_saved(before_approved, updated.approved, &notice)
                .await;
        }

        Ok(updated.into())
    }

    async fn notice_for(&self, newsletter: &Newsletter) -> Option<ContentNotice> {
        let author = match self.user_repo.find_by_id(newsletter.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::error!(
                    newsletter_id = i64::from(newsletter.id),
                    "newsletter author missing"
                );
                return None;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load newsletter author");
                return None;
            }
        };

        let publisher = match newsletter.publisher_id {
            Some(publisher_id) => match self.publisher_repo.find_by_id(publisher_id).await {
                Ok(found) => found.map(|publisher| PublisherRef {
                    id: publisher.id,
                    name: publisher.name.into(),
                }),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load newsletter publisher");
                    return None;
                }
            },
            None => None,
        };

        Some(ContentNotice {
            kind: ContentKind::Newsletter,
            title: newsletter.title.as_str().to_string(),
            body: newsletter.body.as_str().to_string(),
            author: AuthorRef {
                id: author.id,
                name: author.display_label().to_string(),
            },
            publisher,
        })
    }
}
