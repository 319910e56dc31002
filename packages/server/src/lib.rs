pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::extractors::auth::SESSION_COOKIE;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PawFinder API",
        version = "1.0.0",
        description = "API for the PawFinder found-dog listing service"
    ),
    paths(
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::status,
        handlers::dog::list_dogs,
        handlers::dog::get_dog,
        handlers::dog::create_dog,
        handlers::admin::update_dog_status,
        handlers::upload::upload_images,
    ),
    tags(
        (name = "Auth", description = "Session login and status"),
        (name = "Dogs", description = "Found-dog listings: browse, filter, report"),
        (name = "Admin", description = "Listing status triage"),
        (name = "Uploads", description = "Report image uploads"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(config.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let api = ApiDoc::openapi();

    Router::new()
        .nest("/api", routes::api_routes())
        .nest_service("/uploads", ServeDir::new(&state.config.uploads.dir))
        .layer(cors_layer(&state.config.server.cors))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
