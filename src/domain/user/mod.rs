pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, RoleProfile, User};
pub use repository::UserRepository;
pub use value_objects::{DisplayName, EmailAddress, UserId, Username};
