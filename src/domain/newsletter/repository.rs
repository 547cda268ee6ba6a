use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter, NewsletterUpdate};
use crate::domain::newsletter::value_objects::NewsletterId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;
    async fn update_approval(&self, update: NewsletterUpdate) -> DomainResult<Newsletter>;
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>>;
    async fn list(&self, include_unapproved: bool) -> DomainResult<Vec<Newsletter>>;
}
