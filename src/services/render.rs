use minijinja::{context, Environment, Value};
use serde::Serialize;

use crate::models::errors::AppError;
use crate::models::wrapper_models::WrapperPreset;

const ROOT_TEMPLATE: &str = "root.html";
pub const FEEDBACK_DETAIL_PAGE: &str = "feedback_detail.html";

const DOCUMENT_TITLE: &str = "Feedback";

/// Compiled page templates plus the root wrapper every page is framed in.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
    preset: WrapperPreset,
}

impl PageRenderer {
    pub fn new(preset: WrapperPreset) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(ROOT_TEMPLATE, include_str!("../../templates/root.html"))?;
        env.add_template(
            FEEDBACK_DETAIL_PAGE,
            include_str!("../../templates/feedback_detail.html"),
        )?;
        Ok(Self { env, preset })
    }

    pub fn preset(&self) -> WrapperPreset {
        self.preset
    }

    /// Renders `page` with `props` and frames the result in the root wrapper.
    ///
    /// The page receives the props unchanged, and the same props are embedded
    /// in the document as JSON.
    pub fn render_page<P: Serialize>(&self, page: &str, props: &P) -> Result<String, AppError> {
        let page_html = self.env.get_template(page)?.render(props)?;
        let page_data = embeddable_json(props)?;
        self.wrap(&page_html, &page_data)
    }

    fn wrap(&self, page_html: &str, page_data: &str) -> Result<String, AppError> {
        let document = self.env.get_template(ROOT_TEMPLATE)?.render(context! {
            title => DOCUMENT_TITLE,
            wrapper_class => self.preset.container_class(),
            page => Value::from_safe_string(page_html.to_string()),
            page_data => Value::from_safe_string(page_data.to_string()),
        })?;
        Ok(document)
    }
}

/// JSON that can sit inside a `<script>` element without closing it early.
fn embeddable_json<P: Serialize>(props: &P) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(props)?.replace('<', "\\u003c"))
}
