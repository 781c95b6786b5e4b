use std::sync::Arc;

use crate::models::wrapper_models::WrapperPreset;
use crate::services::render::PageRenderer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(preset: WrapperPreset) -> Result<Self, minijinja::Error> {
        Ok(Self {
            renderer: Arc::new(PageRenderer::new(preset)?),
        })
    }
}
