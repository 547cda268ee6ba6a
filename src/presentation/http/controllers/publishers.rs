// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::CreatePublisherCommand, dto::PublisherDto,
    queries::publishers::ListPublishersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePublisherRequest {
    pub name: String,
    pub description: Option<String>,
}

pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers(ListPublishersQuery)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<Json<PublisherDto>> {
    let command = CreatePublisherCommand {
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .publisher_commands
        .create_publisher(command)
        .await
        .into_http()
        .map(Json)
}
