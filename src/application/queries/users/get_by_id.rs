// src/application/queries/users/get_by_id.rs
use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserByIdQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user_by_id(&self, query: GetUserByIdQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
