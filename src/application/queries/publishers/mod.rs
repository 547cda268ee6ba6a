mod list;
mod service;

pub use list::ListPublishersQuery;
pub use service::PublisherQueryService;
