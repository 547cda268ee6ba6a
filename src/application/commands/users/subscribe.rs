// src/application/commands/users/subscribe.rs
use super::UserCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        publisher::PublisherId,
        user::{RoleProfile, User, UserId},
    },
};

pub struct SubscribeToPublisherCommand {
    pub reader_id: i64,
    pub publisher_id: i64,
}

pub struct SubscribeToJournalistCommand {
    pub reader_id: i64,
    pub journalist_id: i64,
}

impl UserCommandService {
    pub async fn subscribe_to_publisher(
        &self,
        command: SubscribeToPublisherCommand,
    ) -> ApplicationResult<()> {
        let reader_id = UserId::new(command.reader_id)?;
        let publisher_id = PublisherId::new(command.publisher_id)?;

        self.require_reader(reader_id).await?;
        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        self.user_repo
            .subscribe_to_publisher(reader_id, publisher_id)
            .await?;
        Ok(())
    }

    pub async fn subscribe_to_journalist(
        &self,
        command: SubscribeToJournalistCommand,
    ) -> ApplicationResult<()> {
        let reader_id = UserId::new(command.reader_id)?;
        let journalist_id = UserId::new(command.journalist_id)?;

        self.require_reader(reader_id).await?;
        let journalist = self
            .user_repo
            .find_by_id(journalist_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
        if !matches!(journalist.profile, RoleProfile::Journalist { .. }) {
            return Err(ApplicationError::validation(
                "subscription target is not a journalist",
            ));
        }

        self.user_repo
            .subscribe_to_journalist(reader_id, journalist_id)
            .await?;
        Ok(())
    }

    async fn require_reader(&self, id: UserId) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reader not found"))?;
        if !matches!(user.profile, RoleProfile::Reader { .. }) {
            return Err(ApplicationError::validation(
                "only readers can hold subscriptions",
            ));
        }
        Ok(user)
    }
}
