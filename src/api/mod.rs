//! HTTP API over an in-memory feature board.

mod handlers;
mod types;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use types::*;

use crate::config::ServerConfig;
use crate::models::PrdPanel;
use crate::store::FeatureStore;

/// Shared session state: one feature store and one PRD panel.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<FeatureStore>>,
    panel: Arc<Mutex<PrdPanel>>,
}

impl AppState {
    pub fn new(store: FeatureStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            panel: Arc::new(Mutex::new(PrdPanel::Hidden)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(FeatureStore::seeded())
    }

    fn store(&self) -> MutexGuard<'_, FeatureStore> {
        self.store.lock().expect("store lock poisoned")
    }

    fn panel(&self) -> MutexGuard<'_, PrdPanel> {
        self.panel.lock().expect("panel lock poisoned")
    }
}

pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        // Features
        .route("/features", get(handlers::get_board))
        .route("/features", post(handlers::create_feature))
        .route("/features/{id}", patch(handlers::update_feature))
        .route("/features/{id}", delete(handlers::delete_feature))
        .route("/features/{id}/prd", post(handlers::generate_prd))
        // PRD panel
        .route("/prd", get(handlers::get_prd))
        .route("/prd", delete(handlers::dismiss_prd))
        .route("/prd/top", post(handlers::generate_top_prd))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(state)
}
