mod register;
mod role;
mod service;
mod subscribe;

pub use register::RegisterUserCommand;
pub use role::ChangeRoleCommand;
pub use service::UserCommandService;
pub use subscribe::{SubscribeToJournalistCommand, SubscribeToPublisherCommand};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::RoleProfile;

fn parse_role(role: &str) -> ApplicationResult<RoleProfile> {
    match role {
        "reader" => Ok(RoleProfile::reader()),
        "journalist" => Ok(RoleProfile::journalist()),
        "editor" => Ok(RoleProfile::Editor),
        other => Err(ApplicationError::validation(format!(
            "unknown role: {other}"
        ))),
    }
}
