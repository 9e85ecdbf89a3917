//! Mapping emission
//!
//! Pure transcription of the typed tree into the mapping document. Types
//! are already decided; this stage only formats them and injects the
//! synthesized cross-field search fields.

use super::types::{FieldMapping, FieldType, MappingDocument, MappingProperties, TypedNode, TypedTree};
use std::collections::BTreeMap;

/// Aggregate fields every keyword/text field is copied into
pub const COPY_TO_TARGETS: [&str; 2] = ["internal.fulltext", "internal.autocomplete"];

/// Name of the synthesized aggregate object, present in every mapping
const INTERNAL_FIELD: &str = "internal";

/// Emit the mapping document for a typed tree
pub fn emit_mapping(tree: &TypedTree) -> MappingDocument {
    let mut properties = emit_children(&tree.root);
    properties.insert(INTERNAL_FIELD.to_string(), internal_block());
    MappingDocument {
        mappings: MappingProperties { properties },
    }
}

fn emit_children(children: &BTreeMap<String, TypedNode>) -> BTreeMap<String, FieldMapping> {
    children
        .iter()
        .map(|(name, node)| (name.clone(), emit_node(node)))
        .collect()
}

fn emit_node(node: &TypedNode) -> FieldMapping {
    match node {
        TypedNode::Object(children) => FieldMapping::object(emit_children(children)),
        TypedNode::Field(field_type) => emit_field(field_type),
    }
}

fn emit_field(field_type: &FieldType) -> FieldMapping {
    let mut mapping = FieldMapping::new(field_type.engine_type());
    if let Some(format) = field_type.date_format() {
        mapping = mapping.with_format(format);
    }
    if field_type.is_textual() {
        mapping = mapping.with_copy_to(&COPY_TO_TARGETS);
    }
    mapping
}

/// The fixed `internal` object: `autocomplete` (keyword) and `fulltext`
/// (text with term-frequency data), not derived from any input document
fn internal_block() -> FieldMapping {
    let mut fields = BTreeMap::new();
    fields.insert("autocomplete".to_string(), FieldMapping::new("keyword"));
    fields.insert(
        "fulltext".to_string(),
        FieldMapping::new("text").with_fielddata(),
    );
    FieldMapping::object(fields)
}
