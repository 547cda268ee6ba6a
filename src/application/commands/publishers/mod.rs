mod create;
mod service;

pub use create::CreatePublisherCommand;
pub use service::PublisherCommandService;
