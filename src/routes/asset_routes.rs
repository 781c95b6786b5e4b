use std::sync::Arc;
use axum::Router;
use axum::routing::get;
use crate::controllers::assets::stylesheet;
use crate::models::app_state::AppState;

pub fn asset_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/app.css", get(stylesheet))
}
