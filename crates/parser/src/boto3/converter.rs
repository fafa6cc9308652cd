//! Converts boto3 resource documents into the common resource model

use super::types::{ActionDefinition, RequestDefinition, ResourceDefinition, ResourceDocument};
use botodocs_common::naming::xform_name;
use botodocs_common::{
    ActionModel, CollectionModel, Identifier, RequestModel, RequestParam, ResourceModel,
    ResourceWaiter, ResponseResource, ServiceResourceModel, SubResourceModel,
};

/// Name of the top-level resource, as the SDK reports it
pub const SERVICE_RESOURCE_NAME: &str = "ServiceResource";

/// Convert a `resources-1.json` document
pub fn convert_resources(document: ResourceDocument) -> ServiceResourceModel {
    let mut service = convert_resource(SERVICE_RESOURCE_NAME, &document.service);
    service
        .sub_resources
        .extend(implicit_sub_resources(&document));
    let resources = document
        .resources
        .iter()
        .map(|(name, definition)| (name.clone(), convert_resource(name, definition)))
        .collect();

    ServiceResourceModel { service, resources }
}

fn convert_resource(name: &str, definition: &ResourceDefinition) -> ResourceModel {
    ResourceModel {
        name: name.to_string(),
        identifiers: definition
            .identifiers
            .iter()
            .map(|i| Identifier {
                name: i.name.clone(),
                member_name: i.member_name.clone(),
            })
            .collect(),
        shape: definition.shape.clone(),
        actions: convert_actions(&definition.actions),
        batch_actions: convert_actions(&definition.batch_actions),
        waiters: definition
            .waiters
            .iter()
            .map(|(name, waiter)| ResourceWaiter {
                name: xform_name(&format!("WaitUntil{}", name)),
                waiter_name: waiter.waiter_name.clone(),
            })
            .collect(),
        sub_resources: definition
            .has
            .iter()
            // References whose identifiers come from loaded data are not sub-resources
            .filter(|(_, has)| has.resource.identifiers.iter().all(|i| i.source != "data"))
            .map(|(name, has)| SubResourceModel {
                name: name.clone(),
                resource_type: has.resource.type_name.clone(),
                identifiers: has
                    .resource
                    .identifiers
                    .iter()
                    .map(|i| i.target.clone())
                    .collect(),
            })
            .collect(),
        collections: definition
            .has_many
            .iter()
            .map(|(name, has_many)| CollectionModel {
                name: xform_name(name),
                request: convert_request(&has_many.request),
                resource_type: has_many.resource.type_name.clone(),
            })
            .collect(),
    }
}

/// The service resource exposes every resource type, not only the ones its
/// `has` block names; the rest are created from their own identifiers.
fn implicit_sub_resources(document: &ResourceDocument) -> Vec<SubResourceModel> {
    document
        .resources
        .iter()
        .filter(|(name, _)| {
            !document
                .service
                .has
                .values()
                .any(|has| &has.resource.type_name == *name)
        })
        .map(|(name, definition)| SubResourceModel {
            name: name.clone(),
            resource_type: name.clone(),
            identifiers: definition.identifiers.iter().map(|i| i.name.clone()).collect(),
        })
        .collect()
}

fn convert_actions(
    actions: &std::collections::BTreeMap<String, ActionDefinition>,
) -> Vec<ActionModel> {
    actions
        .iter()
        .map(|(name, action)| ActionModel {
            name: xform_name(name),
            request: convert_request(&action.request),
            resource: action.resource.as_ref().map(|r| ResponseResource {
                type_name: r.type_name.clone(),
                identifiers: r.identifiers.iter().map(|i| i.target.clone()).collect(),
            }),
        })
        .collect()
}

fn convert_request(request: &RequestDefinition) -> RequestModel {
    RequestModel {
        operation: request.operation.clone(),
        params: request
            .params
            .iter()
            .map(|p| RequestParam {
                target: p.target.clone(),
                source: p.source.clone(),
                name: p.name.clone(),
            })
            .collect(),
    }
}
