pub mod article;
pub mod errors;
pub mod newsletter;
pub mod publisher;
pub mod user;
