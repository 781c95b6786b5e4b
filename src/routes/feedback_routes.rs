use std::sync::Arc;
use axum::Router;
use axum::routing::get;
use crate::controllers::feedback::get_feedback;
use crate::models::app_state::AppState;

pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{id}", get(get_feedback))
}
