// src/application/commands/users/role.rs
use super::{parse_role, UserCommandService};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct ChangeRoleCommand {
    pub id: i64,
    pub role: String,
}

impl UserCommandService {
    /// Swap the user's role profile. The variant replacement drops the old
    /// role's relationship sets wholesale; there is nothing to clear.
    pub async fn change_role(&self, command: ChangeRoleCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        let profile = parse_role(&command.role)?;

        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        if user.profile.role_name() == profile.role_name() {
            return Ok(user.into());
        }

        let updated = self.user_repo.replace_profile(id, profile).await?;
        Ok(updated.into())
    }
}
