//! Markdown documentation generation for botodocs
//!
//! This crate turns loaded service definitions into a browsable markdown
//! site (docsify layout) rooted at an output directory:
//!
//! - `README.md`, `services.md`, `_sidebar.md`
//! - `services/<prefix>.md` and, below `services/<prefix>/`, the client and
//!   its operations, data types, paginators, waiters and resources
//!
//! Every link inside the generated pages is relative to the output root.

mod client;
pub mod collector;
mod collections;
mod data_types;
pub mod markdown;
mod method;
mod paginators;
mod render;
mod resources;
mod site;
mod templates;
mod waiters;
mod writer;

pub use collector::find_all_shapes;
pub use writer::DocWriter;

use botodocs_common::{Result, ServiceCatalog, ServiceDefinition, SiteConfig};
use render::{Navigation, Renderer, ServiceContext};
use std::path::Path;
use tera::Tera;
use tracing::{info, warn};

/// Outcome of a site generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSummary {
    /// Services that were documented, in generation order
    pub services: Vec<String>,
    /// Services that failed to load, with the reason
    pub skipped: Vec<(String, String)>,
    pub files_written: usize,
}

/// Documentation site generator
///
/// Holds the site configuration and the loaded templates; one generator
/// can produce any number of sites.
pub struct DocsGenerator {
    config: SiteConfig,
    tera: Tera,
}

impl DocsGenerator {
    /// Create a new generator with the given site configuration
    pub fn new(config: SiteConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { config, tera })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Generate the site for every selected service of a catalog
    ///
    /// Services that fail to load are logged and skipped; write failures
    /// abort the run.
    pub fn generate_site(&self, catalog: &dyn ServiceCatalog, output_dir: &Path) -> Result<SiteSummary> {
        let writer = DocWriter::new(output_dir)?;
        let renderer = self.renderer(&writer);
        let mut nav = Navigation::new();
        let mut summary = SiteSummary::default();

        site::write_readme(&renderer)?;

        for name in catalog.service_names()? {
            if !self.config.is_selected(&name) {
                continue;
            }
            match catalog.load_service(&name) {
                Ok(service) => {
                    self.write_service(&renderer, &service, &mut nav)?;
                    summary.services.push(name);
                }
                Err(e) => {
                    warn!(service = %name, error = %e, "failed to load service, skipping");
                    summary.skipped.push((name, e.to_string()));
                }
            }
        }

        site::write_navigation(&renderer, &nav)?;
        summary.files_written = writer.files_written();
        info!(
            services = summary.services.len(),
            skipped = summary.skipped.len(),
            files = summary.files_written,
            "site generated"
        );
        Ok(summary)
    }

    /// Generate the site for services that are already loaded
    pub fn generate_services(
        &self,
        services: &[ServiceDefinition],
        output_dir: &Path,
    ) -> Result<SiteSummary> {
        let writer = DocWriter::new(output_dir)?;
        let renderer = self.renderer(&writer);
        let mut nav = Navigation::new();
        let mut summary = SiteSummary::default();

        site::write_readme(&renderer)?;
        for service in services {
            if !self.config.is_selected(service.name()) {
                continue;
            }
            self.write_service(&renderer, service, &mut nav)?;
            summary.services.push(service.name().to_string());
        }
        site::write_navigation(&renderer, &nav)?;

        summary.files_written = writer.files_written();
        Ok(summary)
    }

    fn renderer<'a>(&'a self, writer: &'a DocWriter) -> Renderer<'a> {
        Renderer {
            tera: &self.tera,
            writer,
            config: &self.config,
        }
    }

    /// All pages of one service, in sidebar order
    fn write_service(
        &self,
        renderer: &Renderer,
        service: &ServiceDefinition,
        nav: &mut Navigation,
    ) -> Result<()> {
        let svc = ServiceContext::new(service);
        info!(service = svc.client_name, "generating service docs");

        site::write_service_page(renderer, &svc, nav)?;
        client::generate(renderer, &svc, nav)?;
        paginators::generate(renderer, &svc, nav)?;
        waiters::generate(renderer, &svc, nav)?;
        resources::generate(renderer, &svc, nav)?;
        data_types::generate(renderer, &svc, nav)?;

        Ok(())
    }
}

/// Generate a site from a catalog (convenience function)
pub fn generate_site(
    catalog: &dyn ServiceCatalog,
    config: SiteConfig,
    output_dir: &Path,
) -> Result<SiteSummary> {
    DocsGenerator::new(config)?.generate_site(catalog, output_dir)
}
