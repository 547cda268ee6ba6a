// src/application/queries/newsletters/list.rs
use super::NewsletterQueryService;
use crate::application::{dto::NewsletterDto, error::ApplicationResult};

pub struct ListNewslettersQuery {
    pub include_unapproved: bool,
}

impl NewsletterQueryService {
    pub async fn list_newsletters(
        &self,
        query: ListNewslettersQuery,
    ) -> ApplicationResult<Vec<NewsletterDto>> {
        let newsletters = self.repo.list(query.include_unapproved).await?;
        Ok(newsletters.into_iter().map(NewsletterDto::from).collect())
    }
}
