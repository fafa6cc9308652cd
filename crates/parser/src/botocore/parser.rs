//! botocore service file parser

use super::types::{PaginatorDocument, ServiceDocument, WaiterDocument};
use crate::boto3::{convert_resources, ResourceDocument};
use botodocs_common::{DocgenError, Result, ServiceDefinition};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// botocore service parser
///
/// Holds the parsed `service-2.json` document plus whichever companion
/// documents (paginators, waiters, boto3 resources) were attached.
pub struct ServiceParser {
    /// Loaded service document
    document: ServiceDocument,

    /// Client name (e.g., "s3", "ec2")
    service_name: String,

    paginators: Option<PaginatorDocument>,
    waiters: Option<WaiterDocument>,
    resources: Option<ResourceDocument>,
}

impl ServiceParser {
    /// Load a service model from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ServiceParser::from_file("data/s3/2006-03-01/service-2.json", "s3")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, service_name: &str) -> Result<Self> {
        let content = read_file(path.as_ref())?;
        Self::from_json(&content, service_name)
    }

    /// Parse a service model from JSON string
    pub fn from_json(json: &str, service_name: &str) -> Result<Self> {
        let document: ServiceDocument = parse_json(json, "service model")?;

        Ok(Self {
            document,
            service_name: service_name.to_string(),
            paginators: None,
            waiters: None,
            resources: None,
        })
    }

    /// Attach a `paginators-1.json` document
    pub fn with_paginators_json(mut self, json: &str) -> Result<Self> {
        self.paginators = Some(parse_json(json, "paginators")?);
        Ok(self)
    }

    /// Attach a `waiters-2.json` document
    pub fn with_waiters_json(mut self, json: &str) -> Result<Self> {
        self.waiters = Some(parse_json(json, "waiters")?);
        Ok(self)
    }

    /// Attach a boto3 `resources-1.json` document
    pub fn with_resources_json(mut self, json: &str) -> Result<Self> {
        self.resources = Some(parse_json(json, "resources")?);
        Ok(self)
    }

    pub fn with_paginators_file(self, path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        self.with_paginators_json(&content)
    }

    pub fn with_waiters_file(self, path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        self.with_waiters_json(&content)
    }

    pub fn with_resources_file(self, path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        self.with_resources_json(&content)
    }

    /// Parse everything into a ServiceDefinition
    pub fn parse(&self) -> Result<ServiceDefinition> {
        let model = super::converter::convert_service(self.document.clone(), &self.service_name)?;
        debug!(
            service = %self.service_name,
            operations = model.operations.len(),
            shapes = model.shapes.len(),
            "converted service model"
        );

        let mut service = ServiceDefinition::new(model);
        if let Some(paginators) = &self.paginators {
            service.paginators = super::converter::convert_paginators(paginators.clone());
        }
        if let Some(waiters) = &self.waiters {
            service.waiters = super::converter::convert_waiters(waiters.clone());
        }
        if let Some(resources) = &self.resources {
            service.resources = Some(convert_resources(resources.clone()));
        }

        Ok(service)
    }

    /// Get reference to the underlying service document
    pub fn document(&self) -> &ServiceDocument {
        &self.document
    }
}

/// Read a model file, decompressing `.gz` files
fn read_file(path: &Path) -> Result<String> {
    let read = || -> std::io::Result<String> {
        if path.extension().is_some_and(|ext| ext == "gz") {
            let mut content = String::new();
            GzDecoder::new(fs::File::open(path)?).read_to_string(&mut content)?;
            Ok(content)
        } else {
            fs::read_to_string(path)
        }
    };
    read().map_err(|e| DocgenError::Parse(format!("Failed to read {}: {}", path.display(), e)))
}

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| DocgenError::Parse(format!("Failed to parse {} JSON: {}", what, e)))
}
