// src/application/commands/newsletters/create.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        dto::NewsletterDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        newsletter::{NewNewsletter, NewsletterBody, NewsletterTitle},
        publisher::PublisherId,
        user::{RoleProfile, UserId},
    },
};

pub struct CreateNewsletterCommand {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub publisher_id: Option<i64>,
}

impl NewsletterCommandService {
    pub async fn create_newsletter(
        &self,
        command: CreateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        let title = NewsletterTitle::new(command.title)?;
        let body = NewsletterBody::new(command.body)?;
        let author_id = UserId::new(command.author_id)?;

        let author = self
            .user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        if !matches!(author.profile, RoleProfile::Journalist { .. }) {
            return Err(ApplicationError::validation(
                "only journalists can author newsletters",
            ));
        }

        let publisher_id = match command.publisher_id {
            Some(id) => {
                let id = PublisherId::new(id)?;
                self.publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                Some(id)
            }
            None => None,
        };

        let now = self.clock.now();
        let newsletter = self
            .repo
            .insert(NewNewsletter {
                title,
                body,
                publisher_id,
                author_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        Ok(newsletter.into())
    }
}
