//! boto3 `resources-1.json` document types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root resource document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDocument {
    /// The service resource (`boto3.resource('s3')`)
    pub service: ResourceDefinition,

    /// Named resource definitions
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceDefinition>,
}

/// A resource definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    #[serde(default)]
    pub identifiers: Vec<IdentifierDefinition>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub actions: BTreeMap<String, ActionDefinition>,
    #[serde(default)]
    pub batch_actions: BTreeMap<String, ActionDefinition>,
    #[serde(default)]
    pub waiters: BTreeMap<String, WaiterDefinition>,
    #[serde(default)]
    pub has: BTreeMap<String, HasDefinition>,
    #[serde(default)]
    pub has_many: BTreeMap<String, HasManyDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierDefinition {
    pub name: String,
    #[serde(default)]
    pub member_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub request: RequestDefinition,
    #[serde(default)]
    pub resource: Option<ResourceReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDefinition {
    pub operation: String,
    #[serde(default)]
    pub params: Vec<ParamDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDefinition {
    pub target: String,
    pub source: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reference from an action, `has` or `hasMany` entry to a resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceReference {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub identifiers: Vec<ReferenceIdentifier>,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceIdentifier {
    pub target: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterDefinition {
    pub waiter_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HasDefinition {
    pub resource: ResourceReference,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HasManyDefinition {
    pub request: RequestDefinition,
    pub resource: ResourceReference,
}
