use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::entity::{NewUser, RoleProfile, User};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
    async fn replace_profile(&self, id: UserId, profile: RoleProfile) -> DomainResult<User>;
    async fn subscribe_to_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()>;
    async fn subscribe_to_journalist(
        &self,
        reader: UserId,
        journalist: UserId,
    ) -> DomainResult<()>;

    /// Readers subscribed to the given publisher.
    async fn subscribers_of_publisher(&self, publisher: PublisherId) -> DomainResult<Vec<User>>;

    /// Readers following the given journalist.
    async fn followers_of_journalist(&self, journalist: UserId) -> DomainResult<Vec<User>>;
}
