//! Resource model: the object-oriented layer over a service's client
//!
//! Names follow the SDK's conventions: actions, batch actions and
//! collections are snake_case, sub-resources keep their declared case and
//! resource waiters are exposed as `wait_until_<name>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource identifier declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub member_name: Option<String>,
}

/// Parameter bound into an action's request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParam {
    /// Request member the value is written to
    pub target: String,
    /// Where the value comes from: `identifier`, `data`, `string`, ...
    pub source: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Client request made by an action or collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestModel {
    pub operation: String,
    #[serde(default)]
    pub params: Vec<RequestParam>,
}

/// Resource returned by an action or enumerated by a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseResource {
    /// Resource definition name, e.g. "Bucket"
    pub type_name: String,
    /// Identifier targets filled in from the response
    #[serde(default)]
    pub identifiers: Vec<String>,
}

/// Action callable on a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionModel {
    /// snake_case action name
    pub name: String,
    pub request: RequestModel,
    #[serde(default)]
    pub resource: Option<ResponseResource>,
}

/// Iterable collection of resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionModel {
    /// snake_case collection name
    pub name: String,
    pub request: RequestModel,
    /// Resource definition name of the items
    pub resource_type: String,
}

/// Resource waiter that delegates to a client waiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceWaiter {
    /// Method name on the resource, e.g. "wait_until_exists"
    pub name: String,
    /// Client waiter name, e.g. "BucketExists"
    pub waiter_name: String,
}

/// Sub-resource reachable from a parent resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResourceModel {
    /// Accessor name, e.g. "Bucket"
    pub name: String,
    /// Resource definition name
    pub resource_type: String,
    /// Identifier targets the caller must supply
    pub identifiers: Vec<String>,
}

/// One resource definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceModel {
    pub name: String,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    /// Shape describing the resource's attributes
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionModel>,
    #[serde(default)]
    pub batch_actions: Vec<ActionModel>,
    #[serde(default)]
    pub waiters: Vec<ResourceWaiter>,
    #[serde(default)]
    pub sub_resources: Vec<SubResourceModel>,
    #[serde(default)]
    pub collections: Vec<CollectionModel>,
}

/// The service resource plus every resource definition it can reach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResourceModel {
    pub service: ResourceModel,
    pub resources: BTreeMap<String, ResourceModel>,
}

impl ServiceResourceModel {
    pub fn resource(&self, type_name: &str) -> Option<&ResourceModel> {
        self.resources.get(type_name)
    }

    /// Batch actions available on a collection's items
    pub fn batch_actions(&self, collection: &CollectionModel) -> &[ActionModel] {
        self.resource(&collection.resource_type)
            .map(|r| r.batch_actions.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_actions_follow_item_resource() {
        let delete = ActionModel {
            name: "delete".to_string(),
            request: RequestModel {
                operation: "DeleteObjects".to_string(),
                params: vec![],
            },
            resource: None,
        };
        let mut resources = BTreeMap::new();
        resources.insert(
            "Object".to_string(),
            ResourceModel {
                name: "Object".to_string(),
                batch_actions: vec![delete.clone()],
                ..Default::default()
            },
        );
        let model = ServiceResourceModel {
            service: ResourceModel::default(),
            resources,
        };

        let objects = CollectionModel {
            name: "objects".to_string(),
            request: RequestModel {
                operation: "ListObjects".to_string(),
                params: vec![],
            },
            resource_type: "Object".to_string(),
        };
        assert_eq!(model.batch_actions(&objects), &[delete]);

        let missing = CollectionModel {
            resource_type: "Missing".to_string(),
            ..objects
        };
        assert!(model.batch_actions(&missing).is_empty());
    }
}
