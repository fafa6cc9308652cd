//! Service-level model: metadata, operations, paginators and waiters

use crate::naming;
use crate::{ServiceResourceModel, ShapeGraph, ShapeId};
use serde::{Deserialize, Serialize};

/// Service metadata block of a botocore model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub service_full_name: String,
    #[serde(default)]
    pub service_abbreviation: Option<String>,
    pub endpoint_prefix: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub api_version: String,
    #[serde(default)]
    pub uid: Option<String>,
}

impl ServiceMetadata {
    /// Human readable name, e.g. "Amazon S3"
    pub fn display_name(&self) -> &str {
        self.service_abbreviation
            .as_deref()
            .unwrap_or(&self.service_full_name)
    }

    /// Service id used in headings, falls back to the display name
    pub fn service_id(&self) -> &str {
        self.service_id.as_deref().unwrap_or(self.display_name())
    }

    /// Client class name, e.g. "S3" for "Amazon S3"
    pub fn class_name(&self) -> String {
        naming::class_name(self.display_name())
    }
}

/// A single API operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationModel {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub input: Option<ShapeId>,
    #[serde(default)]
    pub output: Option<ShapeId>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Everything the service's API model describes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceModel {
    /// Client name used with `boto3.client(..)`
    pub service_name: String,
    pub metadata: ServiceMetadata,
    #[serde(default)]
    pub documentation: Option<String>,
    /// Operations sorted by name
    pub operations: Vec<OperationModel>,
    pub shapes: ShapeGraph,
}

impl ServiceModel {
    pub fn operation(&self, name: &str) -> Option<&OperationModel> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Link to the AWS API reference for an operation
    pub fn api_reference_url(&self, operation_name: &str) -> String {
        let uid = self.metadata.uid.clone().unwrap_or_else(|| {
            format!("{}-{}", self.service_name, self.metadata.api_version)
        });
        format!(
            "https://docs.aws.amazon.com/goto/WebAPI/{}/{}",
            uid, operation_name
        )
    }
}

/// Paginator configuration for one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorModel {
    /// Operation name the paginator wraps
    pub name: String,
    pub input_token: Vec<String>,
    pub output_token: Vec<String>,
    #[serde(default)]
    pub limit_key: Option<String>,
    #[serde(default)]
    pub result_key: Vec<String>,
}

/// Waiter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterModel {
    pub name: String,
    /// Operation polled by the waiter
    pub operation: String,
    /// Seconds between attempts
    pub delay: u32,
    pub max_attempts: u32,
}

/// A fully loaded service: API model plus optional paginators, waiters and
/// resource model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub model: ServiceModel,
    /// Sorted by name
    #[serde(default)]
    pub paginators: Vec<PaginatorModel>,
    /// Sorted by name
    #[serde(default)]
    pub waiters: Vec<WaiterModel>,
    #[serde(default)]
    pub resources: Option<ServiceResourceModel>,
}

impl ServiceDefinition {
    pub fn new(model: ServiceModel) -> Self {
        Self {
            model,
            paginators: Vec::new(),
            waiters: Vec::new(),
            resources: None,
        }
    }

    /// Client name, e.g. "s3"
    pub fn name(&self) -> &str {
        &self.model.service_name
    }

    /// Doc-root relative path of the service, e.g. "services/s3"
    pub fn service_path(&self) -> String {
        format!("services/{}", self.model.metadata.endpoint_prefix)
    }

    /// Doc-root relative path of the data types page
    pub fn shapes_path(&self) -> String {
        format!("{}/data-types.md", self.service_path())
    }
}
