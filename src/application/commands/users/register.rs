// src/application/commands/users/register.rs
use super::{parse_role, UserCommandService};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, EmailAddress, NewUser, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl UserCommandService {
    pub async fn register_user(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let display_name = command
            .display_name
            .map(DisplayName::new)
            .transpose()?;
        let email = command.email.map(EmailAddress::new).transpose()?;
        let profile = parse_role(&command.role)?;

        if self
            .user_repo
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("username already taken"));
        }

        let user = self
            .user_repo
            .insert(NewUser {
                username,
                display_name,
                email,
                profile,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(user.into())
    }
}
