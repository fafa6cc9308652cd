//! Shape graph: the data types used by SDK operations
//!
//! Shapes reference each other by [`ShapeId`] into a [`ShapeGraph`] arena,
//! so self-referential and mutually-referential types need no shared
//! ownership. Graphs are assembled with [`ShapeGraphBuilder`], which lets a
//! name be declared before its definition is known.

use crate::{DocgenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Index of a shape inside its [`ShapeGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(usize);

impl ShapeId {
    /// Position of the shape in declaration order
    pub fn index(self) -> usize {
        self.0
    }
}

/// Scalar shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Integer,
    Boolean,
    Float,
    Double,
    Long,
    Timestamp,
}

impl PrimitiveType {
    /// Parse a botocore `type` value
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "long" => Some(Self::Long),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::Long => "long",
            Self::Timestamp => "timestamp",
        }
    }

    /// The Python type a caller passes or receives for this primitive
    pub fn python_type(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer | Self::Long => "int",
            Self::Boolean => "bool",
            Self::Float | Self::Double => "float",
            Self::Timestamp => "datetime",
        }
    }

    /// Whether `name` (case-insensitive) is one of the primitive type names
    pub fn is_primitive_name(name: &str) -> bool {
        Self::from_type_name(&name.to_lowercase()).is_some()
    }
}

/// Structure member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member name as it appears in requests and responses
    pub name: String,
    /// Shape of the member value
    pub target: ShapeId,
    /// Member-level documentation, overriding the target's own
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Structural kind of a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "shape", rename_all = "lowercase")]
pub enum ShapeKind {
    Primitive(PrimitiveType),
    Blob,
    List {
        member: ShapeId,
    },
    Map {
        key: ShapeId,
        value: ShapeId,
    },
    Structure {
        /// Members sorted by name
        members: Vec<Member>,
        required: BTreeSet<String>,
    },
}

impl ShapeKind {
    /// botocore `type` name of this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Primitive(primitive) => primitive.type_name(),
            Self::Blob => "blob",
            Self::List { .. } => "list",
            Self::Map { .. } => "map",
            Self::Structure { .. } => "structure",
        }
    }

    /// Primitives and blobs carry no nested types worth documenting
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Primitive(_) | Self::Blob)
    }

    /// Immediate child shapes, in member order
    pub fn children(&self) -> Vec<ShapeId> {
        match self {
            Self::Primitive(_) | Self::Blob => Vec::new(),
            Self::List { member } => vec![*member],
            Self::Map { key, value } => vec![*key, *value],
            Self::Structure { members, .. } => members.iter().map(|m| m.target).collect(),
        }
    }
}

/// A named node in the shape graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub kind: ShapeKind,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub enum_values: Vec<String>,
}

impl Shape {
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Structure members, empty for every other kind
    pub fn members(&self) -> &[Member] {
        match &self.kind {
            ShapeKind::Structure { members, .. } => members,
            _ => &[],
        }
    }

    pub fn is_required(&self, member_name: &str) -> bool {
        match &self.kind {
            ShapeKind::Structure { required, .. } => required.contains(member_name),
            _ => false,
        }
    }

    /// Required member names in member order
    pub fn required_members(&self) -> Vec<&str> {
        self.members()
            .iter()
            .filter(|m| self.is_required(&m.name))
            .map(|m| m.name.as_str())
            .collect()
    }
}

/// Arena of shapes for one service
///
/// Deserialized graphs are rebuilt through [`ShapeGraphBuilder`], so every
/// id they hold is checked before [`ShapeGraph::get`] can see it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SerializedGraph")]
pub struct ShapeGraph {
    shapes: Vec<Shape>,
    by_name: HashMap<String, ShapeId>,
}

/// Wire form of a [`ShapeGraph`]; the name index is derived, not trusted
#[derive(Deserialize)]
struct SerializedGraph {
    shapes: Vec<Shape>,
}

impl TryFrom<SerializedGraph> for ShapeGraph {
    type Error = DocgenError;

    fn try_from(data: SerializedGraph) -> Result<Self> {
        let mut builder = ShapeGraph::builder();
        for shape in data.shapes {
            let id = builder.add(shape.name, shape.kind);
            if let Some(documentation) = shape.documentation {
                builder.document(id, documentation);
            }
            builder.enum_values(id, shape.enum_values);
        }
        builder.build()
    }
}

impl ShapeGraph {
    pub fn builder() -> ShapeGraphBuilder {
        ShapeGraphBuilder::default()
    }

    pub fn get(&self, id: ShapeId) -> &Shape {
        &self.shapes[id.0]
    }

    /// Find a shape by name; the first declaration wins when names repeat
    pub fn lookup(&self, name: &str) -> Option<ShapeId> {
        self.by_name.get(name).copied()
    }

    pub fn shape_for(&self, name: &str) -> Option<&Shape> {
        self.lookup(name).map(|id| self.get(id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All shape ids in declaration order
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        (0..self.shapes.len()).map(ShapeId)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Documentation shown for a member: its own, else its target's
    pub fn member_documentation<'a>(&'a self, member: &'a Member) -> Option<&'a str> {
        member
            .documentation
            .as_deref()
            .or_else(|| self.get(member.target).documentation.as_deref())
    }
}

#[derive(Debug, Clone)]
struct PendingShape {
    name: String,
    kind: Option<ShapeKind>,
    documentation: Option<String>,
    enum_values: Vec<String>,
}

/// Two-phase builder for [`ShapeGraph`]
///
/// `declare` hands out ids up front so definitions may point at shapes that
/// are defined later, including themselves.
#[derive(Debug, Clone, Default)]
pub struct ShapeGraphBuilder {
    pending: Vec<PendingShape>,
}

impl ShapeGraphBuilder {
    pub fn declare(&mut self, name: impl Into<String>) -> ShapeId {
        self.pending.push(PendingShape {
            name: name.into(),
            kind: None,
            documentation: None,
            enum_values: Vec::new(),
        });
        ShapeId(self.pending.len() - 1)
    }

    pub fn define(&mut self, id: ShapeId, kind: ShapeKind) -> &mut Self {
        self.pending[id.0].kind = Some(kind);
        self
    }

    pub fn document(&mut self, id: ShapeId, documentation: impl Into<String>) -> &mut Self {
        self.pending[id.0].documentation = Some(documentation.into());
        self
    }

    pub fn enum_values(&mut self, id: ShapeId, values: Vec<String>) -> &mut Self {
        self.pending[id.0].enum_values = values;
        self
    }

    /// Declare and define in one step
    pub fn add(&mut self, name: impl Into<String>, kind: ShapeKind) -> ShapeId {
        let id = self.declare(name);
        self.define(id, kind);
        id
    }

    /// Structure helper; members are stored sorted by name
    pub fn structure(
        &mut self,
        id: ShapeId,
        members: Vec<(&str, ShapeId)>,
        required: &[&str],
    ) -> &mut Self {
        let mut members: Vec<Member> = members
            .into_iter()
            .map(|(name, target)| Member {
                name: name.to_string(),
                target,
                documentation: None,
            })
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        let required = required.iter().map(|r| r.to_string()).collect();
        self.define(id, ShapeKind::Structure { members, required })
    }

    /// Finish the graph, failing on undefined or out-of-range shapes
    pub fn build(self) -> Result<ShapeGraph> {
        let count = self.pending.len();
        let mut shapes = Vec::with_capacity(count);
        let mut by_name = HashMap::with_capacity(count);

        for (index, pending) in self.pending.into_iter().enumerate() {
            let kind = pending.kind.ok_or_else(|| {
                DocgenError::Parse(format!(
                    "Shape '{}' was referenced but never defined",
                    pending.name
                ))
            })?;

            if let Some(dangling) = kind.children().into_iter().find(|c| c.0 >= count) {
                return Err(DocgenError::Parse(format!(
                    "Shape '{}' references unknown shape id {}",
                    pending.name, dangling.0
                )));
            }

            by_name.entry(pending.name.clone()).or_insert(ShapeId(index));
            shapes.push(Shape {
                name: pending.name,
                kind,
                documentation: pending.documentation,
                enum_values: pending.enum_values,
            });
        }

        Ok(ShapeGraph { shapes, by_name })
    }
}
