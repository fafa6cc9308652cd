//! botocore JSON document types
//!
//! These mirror `service-2.json`, `paginators-1.json` and `waiters-2.json`
//! as shipped in botocore's `data/` directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a `service-2.json` document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDocument {
    /// Model format version (e.g., "2.0")
    #[serde(default)]
    pub version: Option<String>,

    pub metadata: MetadataDocument,

    /// Operations keyed by name
    #[serde(default)]
    pub operations: BTreeMap<String, OperationDocument>,

    /// Shapes keyed by name
    #[serde(default)]
    pub shapes: BTreeMap<String, ShapeDocument>,

    /// Service documentation (HTML)
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Service metadata block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocument {
    pub api_version: String,
    pub endpoint_prefix: String,
    pub service_full_name: String,
    #[serde(default)]
    pub service_abbreviation: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
}

/// Operation definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDocument {
    #[serde(default)]
    pub input: Option<ShapeRef>,
    #[serde(default)]
    pub output: Option<ShapeRef>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Reference to a named shape, optionally documented at the use site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRef {
    pub shape: String,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Scalar shape body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalarDocument {
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
}

/// A botocore shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDocument {
    Structure {
        #[serde(default)]
        members: BTreeMap<String, ShapeRef>,
        #[serde(default)]
        required: Vec<String>,
        #[serde(default)]
        documentation: Option<String>,
    },
    List {
        member: ShapeRef,
        #[serde(default)]
        documentation: Option<String>,
    },
    Map {
        key: ShapeRef,
        value: ShapeRef,
        #[serde(default)]
        documentation: Option<String>,
    },
    String(ScalarDocument),
    Integer(ScalarDocument),
    Long(ScalarDocument),
    Boolean(ScalarDocument),
    Float(ScalarDocument),
    Double(ScalarDocument),
    Timestamp(ScalarDocument),
    Blob(ScalarDocument),

    /// Any kind this generator does not know how to document
    #[serde(other)]
    Unsupported,
}

/// Root of a `paginators-1.json` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginatorDocument {
    #[serde(default)]
    pub pagination: BTreeMap<String, PaginatorConfig>,
}

/// One paginator entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatorConfig {
    #[serde(default)]
    pub input_token: Option<OneOrMany>,
    #[serde(default)]
    pub output_token: Option<OneOrMany>,
    #[serde(default)]
    pub limit_key: Option<String>,
    #[serde(default)]
    pub result_key: Option<OneOrMany>,
}

/// Token fields are either a single name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Root of a `waiters-2.json` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaiterDocument {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub waiters: BTreeMap<String, WaiterConfig>,
}

/// One waiter entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterConfig {
    pub operation: String,
    pub delay: u32,
    pub max_attempts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany = serde_json::from_str("\"NextToken\"").unwrap();
        assert_eq!(one.into_vec(), vec!["NextToken".to_string()]);

        let many: OneOrMany = serde_json::from_str("[\"NextKeyMarker\", \"NextUploadIdMarker\"]").unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn test_unknown_shape_type() {
        let shape: ShapeDocument = serde_json::from_str(r#"{"type": "union"}"#).unwrap();
        assert!(matches!(shape, ShapeDocument::Unsupported));

        let shape: ShapeDocument =
            serde_json::from_str(r#"{"type": "string", "enum": ["a", "b"], "max": 10}"#).unwrap();
        match shape {
            ShapeDocument::String(body) => assert_eq!(body.enum_values, vec!["a", "b"]),
            other => panic!("expected a string shape, got {:?}", other),
        }
    }
}
