//! Markdown fragments shared by the page generators
//!
//! Every link produced here is relative to the doc root.

use botodocs_common::naming::xform_name;
use botodocs_common::{
    Member, PrimitiveType, Shape, ShapeGraph, ShapeId, ShapeKind, SiteConfig,
};
use serde::Serialize;

/// `[Name](path#Name)`
pub fn anchor_link(name: &str, shapes_path: &str) -> String {
    format!("[{}]({}#{})", name, shapes_path, name)
}

/// Link to a shape's data-type entry, or the Python type for scalars
pub fn shape_link(graph: &ShapeGraph, shape: Option<ShapeId>, shapes_path: &str) -> String {
    let Some(id) = shape else {
        return String::new();
    };
    let shape = graph.get(id);
    match &shape.kind {
        ShapeKind::Primitive(primitive) => primitive.python_type().to_string(),
        ShapeKind::Blob => "bytes".to_string(),
        _ => anchor_link(&shape.name, shapes_path),
    }
}

/// Accepted values line for enum shapes, empty otherwise
pub fn enum_message(shape: &Shape) -> String {
    if shape.enum_values.is_empty() {
        return String::new();
    }
    let values: Vec<String> = shape.enum_values.iter().map(|v| format!("`{}`", v)).collect();
    format!(
        "\n_This is an enum, accepting values: {}_\n\n",
        values.join(", ")
    )
}

/// Familiar name for a shape's kind: dictionaries and sets read better than
/// structures and lists
pub fn familiar_type_name(shape: &Shape) -> &'static str {
    match &shape.kind {
        ShapeKind::Structure { .. } => "dictionary",
        ShapeKind::List { .. } if shape.name.ends_with("Set") => "set",
        kind => kind.type_name(),
    }
}

/// Members of `owner` restricted to the given names, in member order
pub fn select_members<'a>(owner: &'a Shape, names: &[&str]) -> Vec<&'a Member> {
    owner
        .members()
        .iter()
        .filter(|m| names.contains(&m.name.as_str()))
        .collect()
}

/// One entry per member: name, required marker, type link, docs, enum values
pub fn member_docs(
    graph: &ShapeGraph,
    owner: &Shape,
    members: &[&Member],
    shapes_path: &str,
) -> String {
    let mut members = members.to_vec();
    members.sort_by(|a, b| a.name.cmp(&b.name));

    let mut docs = String::new();
    for member in members {
        let required = if owner.is_required(&member.name) {
            "required type "
        } else {
            "type "
        };
        docs.push_str(&format!(
            "**{}** ({}{}): \n> {}\n\n{}<br/>",
            member.name,
            required,
            shape_link(graph, Some(member.target), shapes_path),
            graph.member_documentation(member).unwrap_or_default(),
            enum_message(graph.get(member.target)),
        ));
    }
    docs
}

/// `## Accepts` section for the given input members
pub fn accepts_section(
    graph: &ShapeGraph,
    input: Option<ShapeId>,
    members: &[&Member],
    shapes_path: &str,
) -> String {
    let Some(id) = input else {
        return "## Accepts\n\n_This operation takes no arguments._\n".to_string();
    };
    format!(
        "## Accepts\n\n_The below arguments are specified in greater detail in {}._\n\n{}\n",
        shape_link(graph, Some(id), shapes_path),
        member_docs(graph, graph.get(id), members, shapes_path)
    )
}

/// `## Returns` section for an output shape
pub fn returns_section(graph: &ShapeGraph, output: Option<ShapeId>, shapes_path: &str) -> String {
    let Some(id) = output else {
        return "## Returns\nNone\n".to_string();
    };
    let shape = graph.get(id);
    let members: Vec<&Member> = shape.members().iter().collect();
    let has = if members.is_empty() { "" } else { "It has:" };

    format!(
        "## Returns\n_This return value is specified in greater detail in {}._\n\n{}\n\n{}\n\n{}\n",
        shape_link(graph, Some(id), shapes_path),
        shape.documentation.as_deref().unwrap_or_default(),
        has,
        member_docs(graph, shape, &members, shapes_path)
    )
}

/// `Name:*hint*`, with optional members wrapped in `Optional[..]`
pub fn param_with_type_hint(
    graph: &ShapeGraph,
    owner: &Shape,
    member: &Member,
    shapes_path: &str,
) -> String {
    let target = graph.get(member.target);
    let hint = match &target.kind {
        ShapeKind::List { .. } => anchor_link(&target.name, shapes_path),
        ShapeKind::Primitive(primitive) => primitive.python_type().to_string(),
        kind => kind.type_name().to_string(),
    };

    if owner.is_required(&member.name) {
        format!("{}:*{}*", member.name, hint)
    } else {
        format!("{}:*Optional[{}]*", member.name, hint)
    }
}

/// Signature parameters, required members first
pub fn param_str(
    graph: &ShapeGraph,
    input: Option<ShapeId>,
    members: &[&Member],
    shapes_path: &str,
) -> String {
    let Some(id) = input else {
        return String::new();
    };
    let owner = graph.get(id);
    let (required, optional): (Vec<&Member>, Vec<&Member>) =
        members.iter().copied().partition(|m| owner.is_required(&m.name));

    required
        .into_iter()
        .chain(optional)
        .map(|m| param_with_type_hint(graph, owner, m, shapes_path))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Example arguments for a snippet, e.g. `Bucket='...', Delete={'Objects': ...}`
pub fn example_params(graph: &ShapeGraph, members: &[&Member]) -> String {
    members
        .iter()
        .map(|m| format!("{}{}", m.name, example_value(graph, m.target)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn example_value(graph: &ShapeGraph, target: ShapeId) -> String {
    let shape = graph.get(target);
    match &shape.kind {
        ShapeKind::List { member } => match graph.get(*member).kind {
            ShapeKind::Primitive(PrimitiveType::String) => "=['...']".to_string(),
            _ => "=[{}]".to_string(),
        },
        ShapeKind::Primitive(PrimitiveType::String) => "='...'".to_string(),
        ShapeKind::Primitive(PrimitiveType::Boolean) => "=True".to_string(),
        ShapeKind::Structure { .. } => {
            let entries: Vec<String> = shape
                .members()
                .iter()
                .filter(|m| shape.is_required(&m.name))
                .map(|m| format!("'{}': {}", m.name, example_literal(graph, m.target)))
                .collect();
            format!("={{{}}}", entries.join(", "))
        }
        _ => String::new(),
    }
}

fn example_literal(graph: &ShapeGraph, target: ShapeId) -> &'static str {
    match graph.get(target).kind {
        ShapeKind::Primitive(PrimitiveType::String) => "'...'",
        ShapeKind::Primitive(PrimitiveType::Boolean) => "True",
        ShapeKind::Primitive(
            PrimitiveType::Integer | PrimitiveType::Long | PrimitiveType::Float | PrimitiveType::Double,
        ) => "0",
        _ => "...",
    }
}

/// Operation docs followed by the API reference link
pub fn operation_documentation(
    documentation: Option<&str>,
    client_name: &str,
    operation_name: &str,
    api_url: &str,
) -> String {
    format!(
        "{}\n\n>See also: [AWS API Documentation for {}.{}]({})",
        documentation.unwrap_or_default(),
        client_name,
        operation_name,
        api_url
    )
}

/// Doc-root path of a client operation page, without extension
pub fn client_function_path(service_path: &str, function_name: &str) -> String {
    format!("{}/client/operations/{}", service_path, function_name)
}

/// `client.[fn](..)` link used where parameters are documented elsewhere
pub fn accepts_redirect_link(client_name: &str, function_name: &str, service_path: &str) -> String {
    format!(
        "_See {}_client.[{}]({}#Accepts) for parameters that you can pass in_",
        client_name,
        function_name,
        client_function_path(service_path, function_name)
    )
}

pub fn returns_redirect_link(client_name: &str, function_name: &str, service_path: &str) -> String {
    format!(
        "_See {}_client.[{}]({}#Returns) for what each page contains_",
        client_name,
        function_name,
        client_function_path(service_path, function_name)
    )
}

/// Snake-case client method behind an operation name
pub fn client_function_name(operation_name: &str) -> String {
    xform_name(operation_name)
}

/// Whether a doc path points at a sub-resource page
pub fn is_sub_resource_path(resource_path: &str) -> bool {
    resource_path.contains("/sub-resources/")
}

/// Page path of a resource type relative to the page documenting it
///
/// Sub-resources of a sub-resource are siblings: they live in the same
/// `sub-resources` directory.
pub fn resource_path_for(resource_name: &str, resource_path: &str) -> String {
    if is_sub_resource_path(resource_path) {
        match resource_path.rfind('/') {
            Some(pos) => format!("{}/{}", &resource_path[..pos], resource_name),
            None => resource_name.to_string(),
        }
    } else {
        format!("{}/sub-resources/{}", resource_path, resource_name)
    }
}

/// Note pointing readers to the type-hint stubs used in snippets
pub fn stubs_note(config: &SiteConfig) -> String {
    format!(
        "> To get type hints for the above, install [{}]({}): `pip install {}` and import it\n",
        config.stubs_package, config.stubs_url, config.stubs_package
    )
}

/// Data-type entry for one shape, as rendered on the data types page
#[derive(Debug, Clone, Serialize)]
pub struct ShapeDoc {
    pub name: String,
    pub documentation: String,
    /// e.g. "A dictionary containing:"
    pub description: String,
    pub members: Vec<String>,
}

/// Build the data-type entry for a shape
pub fn shape_doc(graph: &ShapeGraph, id: ShapeId, shapes_path: &str) -> ShapeDoc {
    let shape = graph.get(id);

    // (key, target, member-level docs)
    let entries: Vec<(&str, ShapeId, Option<&str>)> = match &shape.kind {
        ShapeKind::Structure { members, .. } => members
            .iter()
            .map(|m| (m.name.as_str(), m.target, m.documentation.as_deref()))
            .collect(),
        ShapeKind::List { member } => vec![(graph.get(*member).name.as_str(), *member, None)],
        ShapeKind::Map { key, value } => vec![("Key", *key, None), ("Value", *value, None)],
        ShapeKind::Primitive(_) | ShapeKind::Blob => Vec::new(),
    };

    let joiner = if entries.len() > 1 { "containing:\n\n" } else { "of: " };
    let description = format!("A {} {}", familiar_type_name(shape), joiner);

    let members = entries
        .into_iter()
        .map(|(key, target_id, documentation)| {
            let target = graph.get(target_id);
            let documentation = documentation.or(target.documentation.as_deref());
            let required = if shape.is_required(key) { "required " } else { "" };

            let mut line = if key != target.name {
                format!("<b>{}</b> ({})", key, type_description(graph, target_id, required, shapes_path))
            } else if PrimitiveType::is_primitive_name(&target.name) {
                format!("<b>{}</b>", key)
            } else {
                format!("<b>{}</b>", anchor_link(key, shapes_path))
            };

            match documentation {
                Some(doc) if !doc.is_empty() => line.push_str(&format!(": \n\n > {}\n\n", doc)),
                _ => line.push('\n'),
            }
            line.push('\n');
            line.push_str(&enum_message(target));
            line
        })
        .collect();

    ShapeDoc {
        name: shape.name.clone(),
        documentation: shape.documentation.clone().unwrap_or_default(),
        description,
        members,
    }
}

/// Type of a member whose name differs from its target's
fn type_description(graph: &ShapeGraph, target: ShapeId, required: &str, shapes_path: &str) -> String {
    let shape = graph.get(target);
    if shape.kind.is_scalar() {
        return shape.type_name().to_string();
    }
    format!(
        "{}{} {}",
        required,
        anchor_link(&shape.name, shapes_path),
        familiar_type_name(shape)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use botodocs_common::ShapeGraphBuilder;

    const SHAPES: &str = "services/s3/data-types.md";

    struct Fixture {
        graph: ShapeGraph,
        request: ShapeId,
        tags: ShapeId,
        tag: ShapeId,
    }

    fn fixture() -> Fixture {
        let mut builder: ShapeGraphBuilder = ShapeGraph::builder();
        let string = builder.add("String", ShapeKind::Primitive(PrimitiveType::String));
        let flag = builder.add("Boolean", ShapeKind::Primitive(PrimitiveType::Boolean));
        let acl = builder.add("ACL", ShapeKind::Primitive(PrimitiveType::String));
        builder.enum_values(acl, vec!["private".to_string(), "public-read".to_string()]);
        builder.document(acl, "The canned ACL");

        let tag = builder.declare("Tag");
        builder.structure(tag, vec![("Key", string), ("Value", string)], &["Key"]);
        builder.document(tag, "A key-value pair");
        let tags = builder.add("TagSet", ShapeKind::List { member: tag });

        let request = builder.declare("PutBucketRequest");
        builder.structure(
            request,
            vec![("Bucket", string), ("ACL", acl), ("Tagging", tags), ("DryRun", flag)],
            &["Bucket"],
        );

        Fixture {
            graph: builder.build().unwrap(),
            request,
            tags,
            tag,
        }
    }

    fn all_members(graph: &ShapeGraph, id: ShapeId) -> Vec<&Member> {
        graph.get(id).members().iter().collect()
    }

    #[test]
    fn test_shape_link() {
        let f = fixture();
        assert_eq!(shape_link(&f.graph, None, SHAPES), "");
        assert_eq!(
            shape_link(&f.graph, Some(f.tag), SHAPES),
            "[Tag](services/s3/data-types.md#Tag)"
        );
        let string = f.graph.lookup("String");
        assert_eq!(shape_link(&f.graph, string, SHAPES), "str");
    }

    #[test]
    fn test_enum_message() {
        let f = fixture();
        let acl = f.graph.shape_for("ACL").unwrap();
        assert_eq!(
            enum_message(acl),
            "\n_This is an enum, accepting values: `private`, `public-read`_\n\n"
        );
        assert_eq!(enum_message(f.graph.get(f.tag)), "");
    }

    #[test]
    fn test_familiar_type_name() {
        let f = fixture();
        assert_eq!(familiar_type_name(f.graph.get(f.tag)), "dictionary");
        assert_eq!(familiar_type_name(f.graph.get(f.tags)), "set");
        assert_eq!(familiar_type_name(f.graph.shape_for("String").unwrap()), "string");
    }

    #[test]
    fn test_param_str_puts_required_first() {
        let f = fixture();
        let members = all_members(&f.graph, f.request);
        let params = param_str(&f.graph, Some(f.request), &members, SHAPES);
        assert_eq!(
            params,
            "Bucket:*str*, ACL:*Optional[str]*, DryRun:*Optional[bool]*, \
             Tagging:*Optional[[TagSet](services/s3/data-types.md#TagSet)]*"
        );
        assert_eq!(param_str(&f.graph, None, &[], SHAPES), "");
    }

    #[test]
    fn test_example_params() {
        let f = fixture();
        let request = f.graph.get(f.request);
        let members = select_members(request, &["Bucket", "DryRun", "Tagging"]);
        assert_eq!(
            example_params(&f.graph, &members),
            "Bucket='...', DryRun=True, Tagging=[{}]"
        );

        let key = select_members(f.graph.get(f.tag), &["Key"]);
        assert_eq!(example_params(&f.graph, &key), "Key='...'");
    }

    #[test]
    fn test_structure_example_uses_required_members() {
        let mut builder = ShapeGraph::builder();
        let string = builder.add("String", ShapeKind::Primitive(PrimitiveType::String));
        let count = builder.add("Integer", ShapeKind::Primitive(PrimitiveType::Integer));
        let config = builder.declare("Config");
        builder.structure(config, vec![("Name", string), ("Size", count), ("Note", string)], &["Name", "Size"]);
        let request = builder.declare("Request");
        builder.structure(request, vec![("Config", config)], &["Config"]);
        let graph = builder.build().unwrap();

        let members = all_members(&graph, request);
        assert_eq!(example_params(&graph, &members), "Config={'Name': '...', 'Size': 0}");
    }

    #[test]
    fn test_member_docs_and_sections() {
        let f = fixture();
        let members = select_members(f.graph.get(f.request), &["Bucket", "ACL"]);
        let docs = member_docs(&f.graph, f.graph.get(f.request), &members, SHAPES);
        assert!(docs.starts_with("**ACL** (type str): \n> The canned ACL\n\n"));
        assert!(docs.contains("accepting values: `private`"));
        assert!(docs.contains("**Bucket** (required type str): \n> \n\n<br/>"));

        let accepts = accepts_section(&f.graph, Some(f.request), &members, SHAPES);
        assert!(accepts.starts_with("## Accepts"));
        assert!(accepts.contains("[PutBucketRequest](services/s3/data-types.md#PutBucketRequest)"));

        let returns = returns_section(&f.graph, Some(f.tag), SHAPES);
        assert!(returns.contains("A key-value pair"));
        assert!(returns.contains("It has:"));
        assert_eq!(returns_section(&f.graph, None, SHAPES), "## Returns\nNone\n");
    }

    #[test]
    fn test_shape_doc_for_structure_and_list() {
        let f = fixture();
        let doc = shape_doc(&f.graph, f.request, SHAPES);
        assert_eq!(doc.name, "PutBucketRequest");
        assert_eq!(doc.description, "A dictionary containing:\n\n");
        assert_eq!(doc.members.len(), 4);
        // Member named after its target links to it
        assert!(doc.members[0].starts_with(
            "<b>[ACL](services/s3/data-types.md#ACL)</b>: \n\n > The canned ACL"
        ));
        assert!(doc.members[1].starts_with("<b>Bucket</b> (string)"));
        assert!(doc.members[3].starts_with(
            "<b>Tagging</b> ([TagSet](services/s3/data-types.md#TagSet) set)"
        ));

        let list = shape_doc(&f.graph, f.tags, SHAPES);
        assert_eq!(list.description, "A set of: ");
        assert_eq!(
            list.members,
            vec!["<b>[Tag](services/s3/data-types.md#Tag)</b>: \n\n > A key-value pair\n\n\n"]
        );
    }

    #[test]
    fn test_shape_doc_required_marker() {
        let mut builder = ShapeGraph::builder();
        let inner = builder.declare("Inner");
        builder.structure(inner, vec![], &[]);
        let outer = builder.declare("Outer");
        builder.structure(outer, vec![("Child", inner)], &["Child"]);
        let graph = builder.build().unwrap();

        let doc = shape_doc(&graph, outer, SHAPES);
        assert_eq!(doc.description, "A dictionary of: ");
        assert_eq!(
            doc.members,
            vec!["<b>Child</b> (required [Inner](services/s3/data-types.md#Inner) dictionary)\n\n"]
        );
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(
            resource_path_for("Bucket", "services/s3/resource"),
            "services/s3/resource/sub-resources/Bucket"
        );
        assert_eq!(
            resource_path_for("Object", "services/s3/resource/sub-resources/Bucket"),
            "services/s3/resource/sub-resources/Object"
        );
        assert!(is_sub_resource_path("services/s3/resource/sub-resources/Bucket"));
        assert!(!is_sub_resource_path("services/s3/resource"));
    }

    #[test]
    fn test_redirect_links() {
        assert_eq!(
            accepts_redirect_link("s3", "list_objects", "services/s3"),
            "_See s3_client.[list_objects](services/s3/client/operations/list_objects#Accepts) \
             for parameters that you can pass in_"
        );
        assert_eq!(client_function_name("ListObjectsV2"), "list_objects_v2");
    }
}
