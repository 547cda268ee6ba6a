// src/application/queries/publishers/list.rs
use super::PublisherQueryService;
use crate::application::{dto::PublisherDto, error::ApplicationResult};

pub struct ListPublishersQuery;

impl PublisherQueryService {
    pub async fn list_publishers(
        &self,
        _query: ListPublishersQuery,
    ) -> ApplicationResult<Vec<PublisherDto>> {
        let publishers = self.repo.list().await?;
        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }
}
