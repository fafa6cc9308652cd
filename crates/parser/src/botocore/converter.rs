//! Converts botocore documents into the common service model

use super::types::{
    PaginatorDocument, ServiceDocument, ShapeDocument, ShapeRef, WaiterDocument,
};
use botodocs_common::{
    DocgenError, Member, OperationModel, PaginatorModel, PrimitiveType, Result, ServiceMetadata,
    ServiceModel, ShapeGraph, ShapeGraphBuilder, ShapeId, ShapeKind, WaiterModel,
};
use std::collections::HashMap;

/// Convert a `service-2.json` document into a ServiceModel
pub fn convert_service(document: ServiceDocument, service_name: &str) -> Result<ServiceModel> {
    let shapes = build_shape_graph(&document)?;

    let mut operations = Vec::with_capacity(document.operations.len());
    for (name, operation) in &document.operations {
        let resolve = |shape_ref: &Option<ShapeRef>| -> Result<Option<ShapeId>> {
            match shape_ref {
                Some(r) => shapes.lookup(&r.shape).map(Some).ok_or_else(|| {
                    DocgenError::Parse(format!(
                        "Operation '{}' references unknown shape '{}'",
                        name, r.shape
                    ))
                }),
                None => Ok(None),
            }
        };

        operations.push(OperationModel {
            name: name.clone(),
            documentation: operation.documentation.clone(),
            input: resolve(&operation.input)?,
            output: resolve(&operation.output)?,
            deprecated: operation.deprecated,
        });
    }

    let metadata = document.metadata;
    Ok(ServiceModel {
        service_name: service_name.to_string(),
        metadata: ServiceMetadata {
            service_full_name: metadata.service_full_name,
            service_abbreviation: metadata.service_abbreviation,
            endpoint_prefix: metadata.endpoint_prefix,
            service_id: metadata.service_id,
            api_version: metadata.api_version,
            uid: metadata.uid,
        },
        documentation: document.documentation,
        operations,
        shapes,
    })
}

/// Build the shape arena: declare every name, then define each shape
fn build_shape_graph(document: &ServiceDocument) -> Result<ShapeGraph> {
    let mut builder = ShapeGraph::builder();
    let ids: HashMap<&str, ShapeId> = document
        .shapes
        .keys()
        .map(|name| (name.as_str(), builder.declare(name.as_str())))
        .collect();

    for (name, shape) in &document.shapes {
        let id = ids[name.as_str()];
        let target = |shape_ref: &ShapeRef| -> Result<ShapeId> {
            ids.get(shape_ref.shape.as_str()).copied().ok_or_else(|| {
                DocgenError::Parse(format!(
                    "Shape '{}' references unknown shape '{}'",
                    name, shape_ref.shape
                ))
            })
        };

        let (kind, documentation, enum_values) = match shape {
            ShapeDocument::Structure {
                members,
                required,
                documentation,
            } => {
                // BTreeMap iteration keeps members sorted by name
                let members = members
                    .iter()
                    .map(|(member_name, member_ref)| {
                        Ok(Member {
                            name: member_name.clone(),
                            target: target(member_ref)?,
                            documentation: member_ref.documentation.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let kind = ShapeKind::Structure {
                    members,
                    required: required.iter().cloned().collect(),
                };
                (kind, documentation.clone(), Vec::new())
            }
            ShapeDocument::List {
                member,
                documentation,
            } => {
                let kind = ShapeKind::List {
                    member: target(member)?,
                };
                (kind, documentation.clone(), Vec::new())
            }
            ShapeDocument::Map {
                key,
                value,
                documentation,
            } => {
                let kind = ShapeKind::Map {
                    key: target(key)?,
                    value: target(value)?,
                };
                (kind, documentation.clone(), Vec::new())
            }
            ShapeDocument::Blob(body) => (
                ShapeKind::Blob,
                body.documentation.clone(),
                body.enum_values.clone(),
            ),
            ShapeDocument::String(body) => scalar(PrimitiveType::String, body),
            ShapeDocument::Integer(body) => scalar(PrimitiveType::Integer, body),
            ShapeDocument::Long(body) => scalar(PrimitiveType::Long, body),
            ShapeDocument::Boolean(body) => scalar(PrimitiveType::Boolean, body),
            ShapeDocument::Float(body) => scalar(PrimitiveType::Float, body),
            ShapeDocument::Double(body) => scalar(PrimitiveType::Double, body),
            ShapeDocument::Timestamp(body) => scalar(PrimitiveType::Timestamp, body),
            ShapeDocument::Unsupported => {
                return Err(DocgenError::Parse(format!(
                    "Shape '{}' has an unsupported type",
                    name
                )));
            }
        };

        builder.define(id, kind);
        if let Some(documentation) = documentation {
            builder.document(id, documentation);
        }
        if !enum_values.is_empty() {
            builder.enum_values(id, enum_values);
        }
    }

    builder.build()
}

fn scalar(
    primitive: PrimitiveType,
    body: &super::types::ScalarDocument,
) -> (ShapeKind, Option<String>, Vec<String>) {
    (
        ShapeKind::Primitive(primitive),
        body.documentation.clone(),
        body.enum_values.clone(),
    )
}

/// Convert a `paginators-1.json` document, sorted by paginator name
pub fn convert_paginators(document: PaginatorDocument) -> Vec<PaginatorModel> {
    document
        .pagination
        .into_iter()
        .map(|(name, config)| PaginatorModel {
            name,
            input_token: config.input_token.map(|t| t.into_vec()).unwrap_or_default(),
            output_token: config.output_token.map(|t| t.into_vec()).unwrap_or_default(),
            limit_key: config.limit_key,
            result_key: config.result_key.map(|t| t.into_vec()).unwrap_or_default(),
        })
        .collect()
}

/// Convert a `waiters-2.json` document, sorted by waiter name
pub fn convert_waiters(document: WaiterDocument) -> Vec<WaiterModel> {
    document
        .waiters
        .into_iter()
        .map(|(name, config)| WaiterModel {
            name,
            operation: config.operation,
            delay: config.delay,
            max_attempts: config.max_attempts,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(shapes: &str) -> ServiceDocument {
        let json = format!(
            r#"{{
                "metadata": {{
                    "apiVersion": "2012-11-05",
                    "endpointPrefix": "sqs",
                    "serviceFullName": "Amazon Simple Queue Service",
                    "serviceAbbreviation": "Amazon SQS"
                }},
                "operations": {{}},
                "shapes": {}
            }}"#,
            shapes
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_cyclic_shapes_resolve() {
        let doc = document(
            r#"{
                "Tree": {"type": "structure", "members": {"Children": {"shape": "TreeList"}}},
                "TreeList": {"type": "list", "member": {"shape": "Tree"}}
            }"#,
        );
        let graph = build_shape_graph(&doc).unwrap();

        let tree = graph.lookup("Tree").unwrap();
        let list = graph.lookup("TreeList").unwrap();
        assert_eq!(graph.get(tree).members()[0].target, list);
        assert_eq!(graph.get(list).kind, ShapeKind::List { member: tree });
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let doc = document(r#"{"Queue": {"type": "list", "member": {"shape": "Missing"}}}"#);
        let err = build_shape_graph(&doc).unwrap_err();
        assert!(err.to_string().contains("unknown shape 'Missing'"));
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let doc = document(r#"{"Choice": {"type": "union", "members": {}}}"#);
        let err = build_shape_graph(&doc).unwrap_err();
        assert!(err.to_string().contains("'Choice'"));
    }
}
