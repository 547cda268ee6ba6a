pub mod articles;
pub mod newsletters;
pub mod publishers;
pub mod users;

pub use articles::ArticleDto;
pub use newsletters::NewsletterDto;
pub use publishers::PublisherDto;
pub use users::UserDto;
