//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::{create_chat, delete_chat, get_chat, health_check},
    state::AppState,
};

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/Chat/CreateChat", post(create_chat))
        .route("/api/Chat/DeleteChat", post(delete_chat))
        .route("/api/Chat/GetChat/{chat_name}", get(get_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
