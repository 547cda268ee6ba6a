// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        publisher::PublisherId,
        user::{RoleProfile, UserId},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub publisher_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let author_id = UserId::new(command.author_id)?;

        let author = self
            .user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        if !matches!(author.profile, RoleProfile::Journalist { .. }) {
            return Err(ApplicationError::validation(
                "only journalists can author articles",
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
        let article = self
            .write_repo
            .insert(NewArticle {
                title,
                body,
                publisher_id,
                author_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        Ok(article.into())
    }
}
