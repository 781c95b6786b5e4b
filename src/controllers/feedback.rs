use std::sync::Arc;
use axum::extract::{Path, State};
use axum::response::Html;
use crate::models::app_state::AppState;
use crate::models::errors::AppError;
use crate::services::feedback::load_feedback_props;
use crate::services::render::FEEDBACK_DETAIL_PAGE;

pub async fn get_feedback(State(app_state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Html<String>, AppError> {
    let props = load_feedback_props(&id).await;
    let document = app_state.renderer.render_page(FEEDBACK_DETAIL_PAGE, &props)?;
    metrics::counter!("feedback_pages_rendered_total", "page" => "feedback_detail").increment(1);
    Ok(Html(document))
}
