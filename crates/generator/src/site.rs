//! Site-wide pages: overview, service list, sidebar and service pages

use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::Result;

pub(crate) const README: &str = "README.md";
pub(crate) const SERVICES: &str = "services.md";
pub(crate) const SIDEBAR: &str = "_sidebar.md";

impl Navigation {
    /// Navigation with the site-wide entries every sidebar starts with
    pub fn new() -> Self {
        Self {
            sidebar: vec![
                format!("- [Overview]({})", README),
                format!("- [Services]({})", SERVICES),
            ],
            services: vec!["# List of supported services".to_string()],
        }
    }
}

pub(crate) fn write_readme(renderer: &Renderer) -> Result<()> {
    renderer.render("readme.md", &renderer.context(), README)
}

pub(crate) fn write_navigation(renderer: &Renderer, nav: &Navigation) -> Result<()> {
    renderer.writer.write_lines(SERVICES, &nav.services)?;
    renderer.writer.write_lines(SIDEBAR, &nav.sidebar)
}

/// `services/<prefix>.md` plus the service's sidebar and list entries
pub(crate) fn write_service_page(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    nav.sidebar
        .push(format!("    - [{}]({})", svc.display_name, svc.service_path));
    nav.services
        .push(format!("  - [{}]({})", svc.display_name, svc.service_path));

    let mut context = svc.context(renderer);
    context.insert(
        "documentation",
        svc.service.model.documentation.as_deref().unwrap_or_default(),
    );
    renderer.render("service.md", &context, &format!("{}.md", svc.service_path))
}
