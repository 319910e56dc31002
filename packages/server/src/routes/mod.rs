use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Everything mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(upload_routes())
        .nest("/dogs", dog_routes())
        .nest("/admin", admin_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/auth/status", get(handlers::auth::status))
}

fn dog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::dog::list_dogs).post(handlers::dog::create_dog),
        )
        .route("/{id}", get(handlers::dog::get_dog))
}

fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/dogs/{id}/status",
        patch(handlers::admin::update_dog_status),
    )
}

fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::upload::upload_images))
        .layer(handlers::upload::upload_body_limit())
}
