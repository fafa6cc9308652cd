//! Site configuration loaded from YAML
//!
//! ```yaml
//! title: botodocs
//! sdk_name: boto3
//! sdk_version: "1.34.0"
//! stubs_package: botostubs
//! exclude: [importexport]
//! ```

use crate::{DocgenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape the generated site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown on the overview page
    pub title: String,
    /// SDK the docs describe, used in snippets (`import boto3`)
    pub sdk_name: String,
    /// SDK version announced on the overview page
    pub sdk_version: String,
    /// Package providing the `# type:` hints used in snippets
    pub stubs_package: String,
    /// Where the stubs package can be found
    pub stubs_url: String,
    /// Official reference, linked from the overview page
    pub official_docs_url: String,
    /// Only these services are generated when non-empty
    pub include: Vec<String>,
    /// Services never generated
    pub exclude: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "botodocs".to_string(),
            sdk_name: "boto3".to_string(),
            sdk_version: "unknown".to_string(),
            stubs_package: "botostubs".to_string(),
            stubs_url: "https://github.com/jeshan/botostubs".to_string(),
            official_docs_url: "https://boto3.amazonaws.com/v1/documentation/api/latest/index.html"
                .to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DocgenError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| DocgenError::Config(format!("Failed to parse {:?}: {}", path, e)))
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Whether a service passes the include/exclude filters
    pub fn is_selected(&self, service_name: &str) -> bool {
        if self.exclude.iter().any(|s| s == service_name) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|s| s == service_name)
    }
}
