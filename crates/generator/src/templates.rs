//! Template loading and management

use botodocs_common::naming::xform_name;
use botodocs_common::{DocgenError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

const TEMPLATES: &[(&str, &str)] = &[
    ("readme.md", include_str!("../templates/readme.md.tera")),
    ("service.md", include_str!("../templates/service.md.tera")),
    ("client.md", include_str!("../templates/client.md.tera")),
    ("method.md", include_str!("../templates/method.md.tera")),
    ("data_types.md", include_str!("../templates/data_types.md.tera")),
    ("paginators.md", include_str!("../templates/paginators.md.tera")),
    ("paginator.md", include_str!("../templates/paginator.md.tera")),
    ("waiters.md", include_str!("../templates/waiters.md.tera")),
    ("waiter.md", include_str!("../templates/waiter.md.tera")),
    ("resource.md", include_str!("../templates/resource.md.tera")),
    ("collection.md", include_str!("../templates/collection.md.tera")),
];

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("snake", snake_filter);

    for (name, source) in TEMPLATES {
        tera.add_raw_template(name, source).map_err(|e| {
            DocgenError::Generation(format!("Failed to load {} template: {}", name, e))
        })?;
    }

    Ok(tera)
}

/// Filter converting an API name to its snake_case method name
fn snake_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake filter expects a string"))?;

    Ok(Value::String(xform_name(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_load() {
        let tera = load_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for (name, _) in TEMPLATES {
            assert!(names.contains(name), "missing template {}", name);
        }
    }

    #[test]
    fn test_snake_filter() {
        let args = HashMap::new();
        let snake = snake_filter(&Value::String("ListObjectsV2".into()), &args).unwrap();
        assert_eq!(snake, Value::String("list_objects_v2".into()));

        assert!(snake_filter(&Value::Bool(true), &args).is_err());
    }
}
