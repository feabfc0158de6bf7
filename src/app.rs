//! Router construction for the guestbook HTTP API.

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::{routes, settings::Settings, storage::SignatureStore};

/// Shared handler state. The store is opened once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub store: SignatureStore,
}

impl AppState {
    pub fn new(store: SignatureStore) -> Self {
        Self { store }
    }
}

pub fn build_router(settings: &Settings, store: SignatureStore) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(settings.index_page()))
        .route("/health", get(routes::health))
        .route("/build-info", get(routes::build_info))
        .route(
            "/signatures",
            get(routes::list_signatures).post(routes::create_signature),
        )
        .route(
            "/signatures/{id}",
            get(routes::get_signature)
                .patch(routes::update_signature)
                .delete(routes::delete_signature),
        )
        .with_state(AppState::new(store))
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes()))
        .layer(TraceLayer::new_for_http())
}
