pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNewsletter, Newsletter, NewsletterUpdate};
pub use repository::NewsletterRepository;
pub use value_objects::{NewsletterBody, NewsletterId, NewsletterTitle};
