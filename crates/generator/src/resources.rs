//! Service resource, resource action and sub-resource pages

use crate::collections;
use crate::markdown::{
    accepts_section, example_params, is_sub_resource_path, operation_documentation, param_str,
    resource_path_for, returns_section, select_members,
};
use crate::method::MethodPage;
use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::naming::{variable_name, xform_name};
use botodocs_common::{
    ActionModel, Member, ResourceModel, ResourceWaiter, Result, ServiceResourceModel,
    SubResourceModel,
};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct Section {
    title: &'static str,
    intro: &'static str,
    items: Vec<String>,
}

/// Where a resource page lives and how snippets refer to the resource
struct ResourceScope<'a> {
    resources: &'a ServiceResourceModel,
    path: String,
    receiver: String,
}

/// Write `resource.md` and everything below it, when the service has a
/// resource model
pub(crate) fn generate(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    let Some(resources) = &svc.service.resources else {
        return Ok(());
    };

    let scope = ResourceScope {
        resources,
        path: format!("{}/resource", svc.service_path),
        receiver: "resource".to_string(),
    };
    nav.sidebar
        .push(format!("        - [{} resource]({})", svc.service_id, scope.path));

    let mut sections = Vec::new();
    push_section(
        &mut sections,
        "Actions",
        "These are the available actions:",
        action_items(renderer, svc, &scope, &resources.service.actions)?,
    );
    push_section(
        &mut sections,
        "Collections",
        "These are the available collections:",
        collections::generate(
            renderer,
            svc,
            resources,
            &resources.service.collections,
            &scope.path,
            &scope.receiver,
        )?,
    );

    let mut sub_resource_items = Vec::new();
    for sub_resource in &resources.service.sub_resources {
        sub_resource_items.push(generate_sub_resource(renderer, svc, &scope, sub_resource, nav)?);
    }
    push_section(
        &mut sections,
        "Sub-resources",
        "These are the available sub-resources:",
        sub_resource_items,
    );

    let mut context = svc.context(renderer);
    context.insert("heading", &format!("{} resource", svc.display_name));
    context.insert(
        "intro",
        &format!(
            "A resource representing {}:\n\nYou create such a resource as follows:",
            svc.display_name
        ),
    );
    context.insert("snippet", &resource_snippet(renderer, svc));
    context.insert("equivalence", "");
    context.insert("sections", &sections);
    renderer.render("resource.md", &context, &format!("{}.md", scope.path))
}

fn push_section(sections: &mut Vec<Section>, title: &'static str, intro: &'static str, items: Vec<String>) {
    if !items.is_empty() {
        sections.push(Section { title, intro, items });
    }
}

fn resource_hint(renderer: &Renderer, svc: &ServiceContext) -> String {
    format!(
        "{}.{}.{}Resource",
        renderer.config.stubs_package, svc.class_name, svc.class_name
    )
}

fn resource_snippet(renderer: &Renderer, svc: &ServiceContext) -> String {
    format!(
        "import {sdk}\n\nresource = {sdk}.resource('{client}')  # type: {hint}",
        sdk = renderer.config.sdk_name,
        client = svc.client_name,
        hint = resource_hint(renderer, svc),
    )
}

/// Write one page per action under `<scope>/operations/`
fn action_items(
    renderer: &Renderer,
    svc: &ServiceContext,
    scope: &ResourceScope,
    actions: &[ActionModel],
) -> Result<Vec<String>> {
    let mut items = Vec::with_capacity(actions.len());
    for action in actions {
        let Some(page) = action_page(renderer, svc, scope, action) else {
            continue;
        };
        let doc_path = format!("{}/operations/{}.md", scope.path, page.name);
        items.push(page.write(renderer, svc, &doc_path)?);
    }
    Ok(items)
}

fn action_page(
    renderer: &Renderer,
    svc: &ServiceContext,
    scope: &ResourceScope,
    action: &ActionModel,
) -> Option<MethodPage> {
    let graph = svc.graph;
    let shapes_path = &svc.shapes_path;
    let Some(operation) = svc.service.model.operation(&action.request.operation) else {
        warn!(
            service = svc.client_name,
            action = %action.name,
            operation = %action.request.operation,
            "action references an unknown operation, skipping"
        );
        return None;
    };

    let input = operation.input.map(|id| graph.get(id));
    let members: Vec<&Member> = input.map(|s| s.members().iter().collect()).unwrap_or_default();

    let returned = action.resource.as_ref().map(|r| r.type_name.as_str());
    let output = returned
        .and_then(|name| scope.resources.resource(name))
        .and_then(|model| model.shape.as_deref())
        .and_then(|shape| graph.lookup(shape));
    let return_type = returned
        .map(|name| format!(" -> [{}]({})", name, resource_path_for(name, &scope.path)))
        .unwrap_or_default();

    // Sub-resources bind request parameters from their identifiers
    let (params, included) = if is_sub_resource_path(&scope.path) {
        let bound: Vec<&str> = action.request.params.iter().map(|p| p.target.as_str()).collect();
        let included: Vec<&Member> = members
            .iter()
            .copied()
            .filter(|m| !bound.contains(&m.name.as_str()))
            .collect();
        (param_str(graph, operation.input, &included, shapes_path), included)
    } else {
        let included = input
            .map(|s| select_members(s, &s.required_members()))
            .unwrap_or_default();
        (param_str(graph, operation.input, &members, shapes_path), included)
    };

    let setup = if is_sub_resource_path(&scope.path) {
        String::new()
    } else {
        resource_snippet(renderer, svc)
    };

    Some(MethodPage {
        name: action.name.clone(),
        kind: "action",
        documentation: operation_documentation(
            operation.documentation.as_deref(),
            svc.client_name,
            &operation.name,
            &svc.service.model.api_reference_url(&operation.name),
        ),
        params,
        return_type,
        setup,
        receiver: scope.receiver.clone(),
        example_params: example_params(graph, &included),
        result_hint: output
            .map(|id| svc.type_hint(&renderer.config.stubs_package, &graph.get(id).name))
            .unwrap_or_default(),
        accepts: accepts_section(graph, operation.input, &included, shapes_path),
        returns: returns_section(graph, output, shapes_path),
    })
}

/// Write a sub-resource page and return its list item
fn generate_sub_resource(
    renderer: &Renderer,
    svc: &ServiceContext,
    parent: &ResourceScope,
    sub_resource: &SubResourceModel,
    nav: &mut Navigation,
) -> Result<String> {
    let scope = ResourceScope {
        resources: parent.resources,
        path: format!("{}/sub-resources/{}", parent.path, sub_resource.name),
        receiver: variable_name(&sub_resource.name),
    };
    nav.sidebar.push(format!(
        "          - [{} sub-resource]({})",
        sub_resource.name, scope.path
    ));

    let empty = ResourceModel::default();
    let model = match parent.resources.resource(&sub_resource.resource_type) {
        Some(model) => model,
        None => {
            warn!(
                service = svc.client_name,
                sub_resource = %sub_resource.name,
                "sub-resource has no resource definition"
            );
            &empty
        }
    };
    debug!(service = svc.client_name, sub_resource = %sub_resource.name, "writing sub-resource");

    let mut sections = Vec::new();
    push_section(
        &mut sections,
        "Actions",
        "These are the available actions:",
        action_items(renderer, svc, &scope, &model.actions)?,
    );
    push_section(
        &mut sections,
        "Collections",
        "These are the available collections:",
        collections::generate(
            renderer,
            svc,
            parent.resources,
            &model.collections,
            &scope.path,
            &scope.receiver,
        )?,
    );
    push_section(
        &mut sections,
        "Waiters",
        "These are the available waiters:",
        model
            .waiters
            .iter()
            .map(|waiter| waiter_item(svc, &scope.receiver, waiter))
            .collect(),
    );

    let title = format!("{}.{}", svc.class_name, sub_resource.name);
    let identifiers: Vec<String> = sub_resource
        .identifiers
        .iter()
        .map(|target| format!("{}='...'", xform_name(target)))
        .collect();
    let snippet = format!(
        "{}\n{} = resource.{}({})  # type: {}.{}",
        resource_snippet(renderer, svc),
        scope.receiver,
        sub_resource.name,
        identifiers.join(", "),
        resource_hint(renderer, svc),
        sub_resource.name,
    );

    let mut context = svc.context(renderer);
    context.insert("heading", &format!("{} sub-resource", title));
    context.insert(
        "intro",
        &format!(
            "A sub-resource representing `{}`:\n\nYou create such a resource as follows:",
            title
        ),
    );
    context.insert("snippet", &snippet);
    context.insert(
        "equivalence",
        &equivalence_message(&sub_resource.name, model.shape.as_deref(), &svc.shapes_path),
    );
    context.insert("sections", &sections);
    renderer.render("resource.md", &context, &format!("{}.md", scope.path))?;

    Ok(format!("-  **[{}]({})**", sub_resource.name, scope.path))
}

/// Pointer from a resource to the shape holding its attributes
fn equivalence_message(name: &str, shape: Option<&str>, shapes_path: &str) -> String {
    match shape {
        None => String::new(),
        Some(shape) if shape != name => format!(
            "_{} has its attributes detailed in [{}]({}#{})_",
            name, shape, shapes_path, shape
        ),
        Some(shape) => format!(
            "_Its attributes are detailed in [{}]({}#{})_",
            shape, shapes_path, shape
        ),
    }
}

fn waiter_item(svc: &ServiceContext, receiver: &str, waiter: &ResourceWaiter) -> String {
    let client_waiter = xform_name(&waiter.waiter_name);
    format!(
        "## {name}\n```python\n{receiver}.{name}(...)\n```\n> Note that this waiter delegates to the client [{client_waiter}]({path}/waiters/{client_waiter}) waiter\n",
        name = waiter.name,
        receiver = receiver,
        client_waiter = client_waiter,
        path = svc.service_path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalence_message() {
        let path = "services/s3/data-types.md";
        assert_eq!(equivalence_message("Bucket", None, path), "");
        assert_eq!(
            equivalence_message("BucketAcl", Some("GetBucketAclOutput"), path),
            "_BucketAcl has its attributes detailed in \
             [GetBucketAclOutput](services/s3/data-types.md#GetBucketAclOutput)_"
        );
        assert_eq!(
            equivalence_message("Bucket", Some("Bucket"), path),
            "_Its attributes are detailed in [Bucket](services/s3/data-types.md#Bucket)_"
        );
    }
}
