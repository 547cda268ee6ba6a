use crate::domain::publisher::value_objects::{PublisherId, PublisherName};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub description: Option<String>,
}
