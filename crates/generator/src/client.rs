//! Client index and per-operation pages

use crate::markdown::{
    accepts_section, client_function_name, client_function_path, example_params,
    operation_documentation, param_str, returns_section, select_members, shape_link,
};
use crate::method::MethodPage;
use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::{Member, OperationModel, Result};
use tracing::debug;

/// Write `client.md` and one page per operation
pub(crate) fn generate(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    let client_path = format!("{}/client", svc.service_path);
    nav.sidebar
        .push(format!("        - [{} client]({})", svc.service_id, client_path));

    let mut items = Vec::with_capacity(svc.service.model.operations.len());
    for operation in &svc.service.model.operations {
        let page = operation_page(renderer, svc, operation);
        let doc_path = format!("{}.md", client_function_path(&svc.service_path, &page.name));
        items.push(page.write(renderer, svc, &doc_path)?);
    }
    debug!(service = svc.client_name, operations = items.len(), "wrote client operations");

    let mut context = svc.context(renderer);
    context.insert("operations", &items);
    renderer.render("client.md", &context, &format!("{}.md", client_path))
}

fn operation_page(renderer: &Renderer, svc: &ServiceContext, operation: &OperationModel) -> MethodPage {
    let graph = svc.graph;
    let shapes_path = &svc.shapes_path;
    let input = operation.input.map(|id| graph.get(id));

    let members: Vec<&Member> = input.map(|s| s.members().iter().collect()).unwrap_or_default();
    let required: Vec<&Member> = input
        .map(|s| select_members(s, &s.required_members()))
        .unwrap_or_default();

    let return_type = match operation.output {
        Some(_) => format!(" -> {}", shape_link(graph, operation.output, shapes_path)),
        None => String::new(),
    };
    let result_hint = operation
        .output
        .map(|id| svc.type_hint(&renderer.config.stubs_package, &graph.get(id).name))
        .unwrap_or_default();

    let mut documentation = operation_documentation(
        operation.documentation.as_deref(),
        svc.client_name,
        &operation.name,
        &svc.service.model.api_reference_url(&operation.name),
    );
    if operation.deprecated {
        documentation = format!("**Deprecated**\n\n{}", documentation);
    }

    MethodPage {
        name: client_function_name(&operation.name),
        kind: "operation",
        documentation,
        params: param_str(graph, operation.input, &members, shapes_path),
        return_type,
        setup: format!(
            "import {sdk}\n\nclient = {sdk}.client('{client}')  # type: {stubs}.{class}",
            sdk = renderer.config.sdk_name,
            client = svc.client_name,
            stubs = renderer.config.stubs_package,
            class = svc.class_name,
        ),
        receiver: "client".to_string(),
        example_params: example_params(graph, &required),
        result_hint,
        accepts: accepts_section(graph, operation.input, &members, shapes_path),
        returns: returns_section(graph, operation.output, shapes_path),
    }
}
