// src/presentation/http/routes.rs
use crate::application::commands::uploads::MAX_UPLOAD_BYTES;
use crate::config::{AppConfig, RateLimitConfig};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, posts, uploads},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Multipart framing and extra fields on top of the image itself. Bodies
/// slightly over the image limit still reach the size check.
const UPLOAD_BODY_SLACK: usize = 1024 * 1024;

/// Router-level settings that do not belong to the application services.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting (tests, or when a proxy limits instead).
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AppConfig::allowed_origins_from_env(),
            rate_limit: None,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: Some(config.rate_limit()),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route("/api/v1/posts/recent", get(posts::recent_posts))
        .route("/api/v1/posts/lookup", get(posts::get_post))
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post_with_categories)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/api/v1/categories/lookup", get(categories::get_category))
        .route(
            "/api/v1/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/v1/uploads",
            post(uploads::upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_BODY_SLACK)),
        );

    let api = match options.rate_limit {
        Some(limits) => match rate_limit_layer(limits) {
            Some(layer) => api.layer(layer),
            None => {
                tracing::warn!(?limits, "rate limiting disabled: invalid limits");
                api
            }
        },
        None => api,
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
