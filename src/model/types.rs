//! Model types referenced by parameters, responses and client properties

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Specification extensions (`x-` keys) attached to a model element
pub type Extensions = BTreeMap<String, JsonValue>;

/// Extension that renames a composite type on the generated surface
pub const NAME_OVERRIDE_EXTENSION: &str = "x-ms-client-name";

/// Primitive kinds, including the special encodings that need a dedicated converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    String,
    Int,
    Long,
    Double,
    Decimal,
    Boolean,
    Bytes,
    Object,
    Credentials,
    Date,
    DateTime,
    DateTimeRfc1123,
    Base64Url,
    UnixTime,
}

impl PrimitiveKind {
    /// Canonical type name used in resolved descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Bytes => "bytes",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Credentials => "credentials",
            PrimitiveKind::Date => "date",
            PrimitiveKind::DateTime => "date-time",
            PrimitiveKind::DateTimeRfc1123 => "date-time-rfc1123",
            PrimitiveKind::Base64Url => "base64-url",
            PrimitiveKind::UnixTime => "unix-time",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of a composite type or a client-level property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    /// Set when the property was produced by flattening a nested composite
    #[serde(default)]
    pub flattened: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            name: name.into(),
            model_type,
            required: false,
            read_only: false,
            flattened: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn flattened(mut self) -> Self {
        self.flattened = true;
        self
    }
}

/// Record-like type with named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeType {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub extensions: Extensions,
}

impl CompositeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            extensions: Extensions::new(),
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Literal name from the name-override extension, if it carries a `name` field
    pub fn name_override(&self) -> Option<String> {
        match self.extensions.get(NAME_OVERRIDE_EXTENSION)?.get("name")? {
            JsonValue::Null => None,
            JsonValue::String(name) => Some(name.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Enumeration type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Closed set of model types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelType {
    Primitive {
        #[serde(rename = "type")]
        primitive: PrimitiveKind,
    },
    Composite(CompositeType),
    Sequence {
        element: Box<ModelType>,
    },
    Enum(EnumType),
}

impl ModelType {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        ModelType::Primitive { primitive: kind }
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn composite(name: impl Into<String>) -> Self {
        ModelType::Composite(CompositeType::new(name))
    }

    pub fn sequence_of(element: ModelType) -> Self {
        ModelType::Sequence {
            element: Box::new(element),
        }
    }

    /// Type name as it appears in resolved descriptors
    pub fn name(&self) -> String {
        match self {
            ModelType::Primitive { primitive } => primitive.as_str().to_string(),
            ModelType::Composite(composite) => composite.name.clone(),
            ModelType::Sequence { element } => format!("{}[]", element.name()),
            ModelType::Enum(enum_type) => enum_type.name.clone(),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, ModelType::Sequence { .. })
    }

    pub fn as_composite(&self) -> Option<&CompositeType> {
        match self {
            ModelType::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn is_primitive(&self, kind: PrimitiveKind) -> bool {
        matches!(self, ModelType::Primitive { primitive } if *primitive == kind)
    }

    /// Depth-first search over this type and everything it contains.
    ///
    /// Visits the type itself, then sequence elements and composite property
    /// types, stopping at the first node for which `predicate` holds.
    pub fn any(&self, predicate: &mut dyn FnMut(&ModelType) -> bool) -> bool {
        if predicate(self) {
            return true;
        }
        match self {
            ModelType::Primitive { .. } | ModelType::Enum(_) => false,
            ModelType::Sequence { element } => element.any(predicate),
            ModelType::Composite(composite) => composite
                .properties
                .iter()
                .any(|property| property.model_type.any(predicate)),
        }
    }

    /// True when this type is, or transitively contains, the primitive `kind`
    pub fn is_or_contains(&self, kind: PrimitiveKind) -> bool {
        self.any(&mut |ty: &ModelType| ty.is_primitive(kind))
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
