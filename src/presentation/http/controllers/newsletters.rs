// src/presentation/http/controllers/newsletters.rs
use crate::application::{
    commands::newsletters::{CreateNewsletterCommand, SetNewsletterApprovalCommand},
    dto::NewsletterDto,
    queries::newsletters::ListNewslettersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, extract::Query, Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewsletterListParams {
    #[serde(default)]
    pub include_unapproved: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateNewsletterRequest {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub publisher_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

pub async fn list_newsletters(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsletterListParams>,
) -> HttpResult<Json<Vec<NewsletterDto>>> {
    state
        .services
        .newsletter_queries
        .list_newsletters(ListNewslettersQuery {
            include_unapproved: params.include_unapproved,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_newsletter(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateNewsletterRequest>,
) -> HttpResult<Json<NewsletterDto>> {
    let command = CreateNewsletterCommand {
        title: payload.title,
        body: payload.body,
        author_id: payload.author_id,
        publisher_id: payload.publisher_id,
    };

    state
        .services
        .newsletter_commands
        .create_newsletter(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_approval(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ApprovalRequest>,
) -> HttpResult<Json<NewsletterDto>> {
    let command = SetNewsletterApprovalCommand {
        id,
        approved: payload.approved,
    };

    state
        .services
        .newsletter_commands
        .set_approval(command)
        .await
        .into_http()
        .map(Json)
}
