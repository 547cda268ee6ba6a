// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        ChangeRoleCommand, RegisterUserCommand, SubscribeToJournalistCommand,
        SubscribeToPublisherCommand,
    },
    dto::UserDto,
    queries::users::GetUserByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}

pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = RegisterUserCommand {
        username: payload.username,
        display_name: payload.display_name,
        email: payload.email,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .register_user(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn change_role(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeRoleRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .change_role(ChangeRoleCommand {
            id,
            role: payload.role,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn subscribe_to_publisher(
    Extension(state): Extension<HttpState>,
    Path((id, publisher_id)): Path<(i64, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .subscribe_to_publisher(SubscribeToPublisherCommand {
            reader_id: id,
            publisher_id,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "subscribed" })))
}

pub async fn subscribe_to_journalist(
    Extension(state): Extension<HttpState>,
    Path((id, journalist_id)): Path<(i64, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .subscribe_to_journalist(SubscribeToJournalistCommand {
            reader_id: id,
            journalist_id,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "subscribed" })))
}
