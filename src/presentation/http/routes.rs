// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, newsletters, publishers, users};
use crate::presentation::http::state::HttpState;
use axum::{
    http::Method,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/v1/articles/{id}/approval", post(articles::set_approval))
        .route(
            "/api/v1/newsletters",
            get(newsletters::list_newsletters).post(newsletters::create_newsletter),
        )
        .route(
            "/api/v1/newsletters/{id}/approval",
            post(newsletters::set_approval),
        )
        .route(
            "/api/v1/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route("/api/v1/users", post(users::register_user))
        .route("/api/v1/users/{id}", get(users::get_user))
        .route("/api/v1/users/{id}/role", put(users::change_role))
        .route(
            "/api/v1/users/{id}/subscriptions/publishers/{publisher_id}",
            post(users::subscribe_to_publisher),
        )
        .route(
            "/api/v1/users/{id}/subscriptions/journalists/{journalist_id}",
            post(users::subscribe_to_journalist),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
