use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, MemoryStore, SessionManagerLayer};

use crate::{
    config::Config,
    contract::{self, ErrorBody},
    db::Storage,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
};

pub mod auth;
pub mod favorites;
pub mod movies;
pub mod recommendations;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "moviemind.sid";

/// Shared handler state
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Arc<Self> {
        Arc::new(Self { storage })
    }
}

/// Creates the application router with all routes and middleware
pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax);

    Router::new()
        .route(contract::HEALTH, get(health_check))
        .merge(api_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(sessions)
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer(config))
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Auth
        .route(contract::REGISTER, post(auth::register))
        .route(contract::LOGIN, post(auth::login))
        .route(contract::LOGOUT, post(auth::logout))
        .route(contract::CURRENT_USER, get(auth::me))
        // Catalog
        .route(contract::MOVIES, get(movies::list))
        .route(contract::MOVIE, get(movies::get))
        .route(contract::RECOMMENDATIONS, get(recommendations::recommend))
        // Favorites
        .route(contract::FAVORITES, get(favorites::list))
        .route(contract::TOGGLE_FAVORITE, post(favorites::toggle))
}

/// Credentialed CORS for the configured front-end origins
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}
