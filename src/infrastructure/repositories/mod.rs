// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_newsletter;
mod postgres_publisher;
mod postgres_user;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_newsletter::PostgresNewsletterRepository;
pub use postgres_publisher::PostgresPublisherRepository;
pub use postgres_user::PostgresUserRepository;
