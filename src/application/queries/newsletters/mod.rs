mod list;
mod service;

pub use list::ListNewslettersQuery;
pub use service::NewsletterQueryService;
