use crate::domain::publisher::Publisher;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            description: publisher.description,
        }
    }
}
