//! Resource collection pages

use crate::markdown::{
    accepts_redirect_link, client_function_name, example_params, resource_path_for,
};
use crate::render::{Renderer, ServiceContext};
use botodocs_common::{CollectionModel, Member, Result, ServiceResourceModel};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct CollectionMethod {
    name: &'static str,
    documentation: String,
    params: String,
    accepts: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchAction {
    name: String,
    accepts: String,
}

/// Write one page per collection and return the index list items
pub(crate) fn generate(
    renderer: &Renderer,
    svc: &ServiceContext,
    resources: &ServiceResourceModel,
    collections: &[CollectionModel],
    resource_path: &str,
    receiver: &str,
) -> Result<Vec<String>> {
    let mut items = Vec::with_capacity(collections.len());

    for collection in collections {
        let collection_path = format!("{}/collections/{}", resource_path, collection.name);
        let function = client_function_name(&collection.request.operation);

        let filter_params = match svc.service.model.operation(&collection.request.operation) {
            Some(operation) => {
                let members: Vec<&Member> = operation
                    .input
                    .map(|id| svc.graph.get(id).members().iter().collect())
                    .unwrap_or_default();
                example_params(svc.graph, &members)
            }
            None => {
                warn!(
                    service = svc.client_name,
                    collection = %collection.name,
                    operation = %collection.request.operation,
                    "collection references an unknown operation"
                );
                String::new()
            }
        };

        let item_type = &collection.resource_type;
        let all_doc = format!(
            "Creates an iterable of all {} resources in the collection",
            item_type
        );
        let methods = vec![
            CollectionMethod {
                name: "all",
                documentation: all_doc.clone(),
                params: String::new(),
                accepts: None,
            },
            CollectionMethod {
                name: "filter",
                documentation: format!("{} filtered by kwargs passed to the method", all_doc),
                params: filter_params,
                accepts: Some(accepts_redirect_link(svc.client_name, &function, &svc.service_path)),
            },
            CollectionMethod {
                name: "limit",
                documentation: format!(
                    "Creates an iterable up to a specified number of {} resources in the collection",
                    item_type
                ),
                params: "count=123".to_string(),
                accepts: None,
            },
            CollectionMethod {
                name: "page_size",
                documentation: format!(
                    "{}, but limits the number of items returned by each service call by the specified number",
                    all_doc
                ),
                params: "count=123".to_string(),
                accepts: None,
            },
        ];

        let batch_actions: Vec<BatchAction> = resources
            .batch_actions(collection)
            .iter()
            .map(|action| BatchAction {
                name: action.name.clone(),
                accepts: accepts_redirect_link(
                    svc.client_name,
                    &client_function_name(&action.request.operation),
                    &svc.service_path,
                ),
            })
            .collect();

        let mut context = svc.context(renderer);
        context.insert("name", &collection.name);
        context.insert("item_type", item_type);
        context.insert("item_path", &resource_path_for(item_type, resource_path));
        context.insert("receiver", receiver);
        context.insert("methods", &methods);
        context.insert("batch_actions", &batch_actions);
        renderer.render("collection.md", &context, &format!("{}.md", collection_path))?;

        items.push(format!("-  **[{}]({})**", collection.name, collection_path));
    }

    Ok(items)
}
