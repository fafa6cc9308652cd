//! Method pages: client operations and resource actions share one layout

use crate::render::{Renderer, ServiceContext};
use botodocs_common::Result;
use serde::Serialize;

/// Everything the `method.md` template shows for one callable
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MethodPage {
    /// snake_case method name
    pub name: String,
    /// "operation" or "action"
    pub kind: &'static str,
    pub documentation: String,
    pub params: String,
    /// ` -> link` or empty
    pub return_type: String,
    /// Snippet lines that create the receiver, empty when it already exists
    pub setup: String,
    pub receiver: String,
    pub example_params: String,
    pub result_hint: String,
    pub accepts: String,
    pub returns: String,
}

impl MethodPage {
    /// Render the page and return its list item for the parent index
    pub fn write(&self, renderer: &Renderer, svc: &ServiceContext, doc_path: &str) -> Result<String> {
        let mut context = svc.context(renderer);
        context.insert("page", self);
        renderer.render("method.md", &context, doc_path)?;

        Ok(format!(
            "-  **[{}]({})**({}){}",
            self.name, doc_path, self.params, self.return_type
        ))
    }
}
