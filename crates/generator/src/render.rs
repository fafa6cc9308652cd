//! Shared state for page generation

use crate::markdown;
use crate::writer::DocWriter;
use botodocs_common::{DocgenError, Result, ServiceDefinition, ShapeGraph, SiteConfig};
use tera::{Context, Tera};

/// Renders templates into files under the doc root
pub(crate) struct Renderer<'a> {
    pub tera: &'a Tera,
    pub writer: &'a DocWriter,
    pub config: &'a SiteConfig,
}

impl<'a> Renderer<'a> {
    /// Context with the site-wide values every page may use
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("title", &self.config.title);
        context.insert("sdk", &self.config.sdk_name);
        context.insert("sdk_version", &self.config.sdk_version);
        context.insert("stubs", &self.config.stubs_package);
        context.insert("stubs_note", &markdown::stubs_note(self.config));
        context.insert("official_docs_url", &self.config.official_docs_url);
        context
    }

    pub fn render(&self, template: &str, context: &Context, doc_path: &str) -> Result<()> {
        let rendered = self.tera.render(template, context).map_err(|e| {
            DocgenError::Generation(format!("Template error in {}: {:?}", template, e))
        })?;
        self.writer.write(doc_path, &rendered)
    }
}

/// Names and paths shared by every page of one service
pub(crate) struct ServiceContext<'a> {
    pub service: &'a ServiceDefinition,
    pub graph: &'a ShapeGraph,
    /// Client name, e.g. "s3"
    pub client_name: &'a str,
    /// Stubs class name, e.g. "S3"
    pub class_name: String,
    pub display_name: &'a str,
    pub service_id: &'a str,
    pub service_path: String,
    pub shapes_path: String,
}

impl<'a> ServiceContext<'a> {
    pub fn new(service: &'a ServiceDefinition) -> Self {
        let metadata = &service.model.metadata;
        Self {
            service,
            graph: &service.model.shapes,
            client_name: service.name(),
            class_name: metadata.class_name(),
            display_name: metadata.display_name(),
            service_id: metadata.service_id(),
            service_path: service.service_path(),
            shapes_path: service.shapes_path(),
        }
    }

    /// `# type:` hint for a value of the given stubs type
    pub fn type_hint(&self, stubs: &str, type_name: &str) -> String {
        format!("  # type: {}.{}.{}", stubs, self.class_name, type_name)
    }

    /// Base context for a page of this service
    pub fn context(&self, renderer: &Renderer) -> Context {
        let mut context = renderer.context();
        context.insert("client_name", self.client_name);
        context.insert("class_name", &self.class_name);
        context.insert("display_name", self.display_name);
        context.insert("service_id", self.service_id);
        context.insert("service_path", &self.service_path);
        context
    }
}

/// Lines collected for the site-wide navigation files
#[derive(Debug)]
pub(crate) struct Navigation {
    pub sidebar: Vec<String>,
    pub services: Vec<String>,
}
