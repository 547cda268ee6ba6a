// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesQuery {
    /// Readers only see approved content; editor tooling sets this.
    pub include_unapproved: bool,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list(query.include_unapproved).await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
