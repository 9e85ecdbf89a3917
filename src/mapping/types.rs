//! Mapping types
//!
//! The resolved field type tags, the typed tree produced by inference and
//! the serializable mapping document sent to the index-creation API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved semantic type of a field
///
/// The epoch date variants carry their wire format as part of the variant
/// rather than as a `date-epoch_second` string to be split later.
/// `Custom` holds any engine-specific type name forced through an override;
/// override values are accepted verbatim and never validated against a
/// closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Could not be classified
    Undefined,
    /// Full-text string
    Text,
    /// Short exact-match string
    Keyword,
    Boolean,
    Long,
    Double,
    /// Calendar date/time string
    Date,
    /// Integer Unix epoch, in seconds
    DateEpochSecond,
    /// Integer Unix epoch, in milliseconds
    DateEpochMillis,
    GeoPoint,
    GeoShape,
    /// Intermediate node with named sub-fields
    Object,
    /// Caller-forced engine type, passed through verbatim
    Custom(String),
}

impl FieldType {
    /// Parse a type tag. Unknown names become `Custom` so callers can force
    /// any engine type string.
    pub fn parse(tag: &str) -> FieldType {
        match tag {
            "UNDEFINED" => FieldType::Undefined,
            "text" => FieldType::Text,
            "keyword" => FieldType::Keyword,
            "boolean" => FieldType::Boolean,
            "long" => FieldType::Long,
            "double" => FieldType::Double,
            "date" => FieldType::Date,
            "date-epoch_second" => FieldType::DateEpochSecond,
            "date-epoch_millis" => FieldType::DateEpochMillis,
            "geo_point" => FieldType::GeoPoint,
            "geo_shape" => FieldType::GeoShape,
            "object" => FieldType::Object,
            other => FieldType::Custom(other.to_string()),
        }
    }

    /// The type name as the engine expects it (`date` for both epoch variants)
    pub fn engine_type(&self) -> &str {
        match self {
            FieldType::Undefined => "UNDEFINED",
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Boolean => "boolean",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Date | FieldType::DateEpochSecond | FieldType::DateEpochMillis => "date",
            FieldType::GeoPoint => "geo_point",
            FieldType::GeoShape => "geo_shape",
            FieldType::Object => "object",
            FieldType::Custom(name) => name,
        }
    }

    /// Date format attached alongside `type: date`, if any
    pub fn date_format(&self) -> Option<&str> {
        match self {
            FieldType::DateEpochSecond => Some("epoch_second"),
            FieldType::DateEpochMillis => Some("epoch_millis"),
            _ => None,
        }
    }

    /// Whether the field carries textual content aggregated into the
    /// cross-field search fields
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::Keyword | FieldType::Text)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Date => write!(f, "date"),
            FieldType::DateEpochSecond => write!(f, "date-epoch_second"),
            FieldType::DateEpochMillis => write!(f, "date-epoch_millis"),
            other => write!(f, "{}", other.engine_type()),
        }
    }
}

/// A node of the typed tree: either an intermediate object or a terminal
/// field with a resolved type
#[derive(Debug, Clone, PartialEq)]
pub enum TypedNode {
    /// Intermediate node, always emitted as `object`
    Object(BTreeMap<String, TypedNode>),
    /// Terminal field
    Field(FieldType),
}

impl TypedNode {
    /// The resolved type for a terminal field, `None` for objects
    pub fn field_type(&self) -> Option<&FieldType> {
        match self {
            TypedNode::Field(t) => Some(t),
            TypedNode::Object(_) => None,
        }
    }
}

/// Result of type inference over a merged shape tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedTree {
    /// Top-level fields
    pub root: BTreeMap<String, TypedNode>,
}

impl TypedTree {
    /// Look up a node by dotted path
    pub fn node(&self, path: &str) -> Option<&TypedNode> {
        let mut parts = path.split('.');
        let mut current = self.root.get(parts.next()?)?;
        for part in parts {
            match current {
                TypedNode::Object(children) => current = children.get(part)?,
                TypedNode::Field(_) => return None,
            }
        }
        Some(current)
    }

    /// Look up the resolved type of a terminal field by dotted path
    pub fn field(&self, path: &str) -> Option<&FieldType> {
        self.node(path).and_then(TypedNode::field_type)
    }
}

/// One field descriptor in the emitted mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Engine type name; absent for intermediate objects, which carry only
    /// `properties`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Date format (`epoch_second` / `epoch_millis`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Aggregate search fields this field's content is copied into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_to: Option<Vec<String>>,

    /// Term-frequency data, enabled on the synthesized fulltext field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielddata: Option<bool>,

    /// Nested field descriptors (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, FieldMapping>>,
}

impl FieldMapping {
    /// Create a bare descriptor with the given engine type name
    pub fn new(engine_type: &str) -> Self {
        Self {
            field_type: Some(engine_type.to_string()),
            format: None,
            copy_to: None,
            fielddata: None,
            properties: None,
        }
    }

    /// Create an intermediate object descriptor
    pub fn object(properties: BTreeMap<String, FieldMapping>) -> Self {
        Self {
            field_type: None,
            format: None,
            copy_to: None,
            fielddata: None,
            properties: Some(properties),
        }
    }

    /// Set the date format
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Set the copy_to targets
    #[must_use]
    pub fn with_copy_to(mut self, targets: &[&str]) -> Self {
        self.copy_to = Some(targets.iter().map(|t| (*t).to_string()).collect());
        self
    }

    /// Enable term-frequency data
    #[must_use]
    pub fn with_fielddata(mut self) -> Self {
        self.fielddata = Some(true);
        self
    }
}

/// Top-level `properties` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MappingProperties {
    /// Field name to descriptor
    pub properties: BTreeMap<String, FieldMapping>,
}

/// The emitted mapping document, as accepted by the index-creation API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MappingDocument {
    /// The mapping body
    pub mappings: MappingProperties,
}

impl MappingDocument {
    /// Convert to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to a pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
