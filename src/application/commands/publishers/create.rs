// src/application/commands/publishers/create.rs
use super::PublisherCommandService;
use crate::{
    application::{dto::PublisherDto, error::ApplicationResult},
    domain::publisher::{NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
    pub description: Option<String>,
}

impl PublisherCommandService {
    pub async fn create_publisher(
        &self,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        let name = PublisherName::new(command.name)?;
        let publisher = self
            .repo
            .insert(NewPublisher {
                name,
                description: command.description,
            })
            .await?;
        Ok(publisher.into())
    }
}
