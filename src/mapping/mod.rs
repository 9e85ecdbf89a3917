//! Mapping inference module
//!
//! Infers an index mapping from a handful of sample JSON documents.
//!
//! # Pipeline
//!
//! - **Shape merging**: folds the samples into one tree of per-field
//!   accumulated values
//! - **Type inference**: resolves a concrete type per field, with geo and
//!   temporal special cases and caller overrides
//! - **Mapping emission**: renders the typed tree as the final mapping
//!   document with the synthesized fulltext/autocomplete fields

mod emit;
mod inference;
mod tree;
mod types;

pub use emit::{emit_mapping, COPY_TO_TARGETS};
pub use inference::{infer_string, infer_values, TypeInferrer, MAX_KEYWORD_LENGTH};
pub use tree::{ShapeNode, ShapeTree};
pub use types::{
    FieldMapping, FieldType, MappingDocument, MappingProperties, TypedNode, TypedTree,
};

use crate::error::Result;
use crate::overrides::TypeOverrides;
use serde_json::Value;

/// Run the full pipeline: merge the sample documents, infer types and emit
/// the mapping document
pub fn infer_mapping(documents: &[Value], overrides: &TypeOverrides) -> Result<MappingDocument> {
    let mut tree = ShapeTree::new();
    for document in documents {
        tree.merge(document)?;
    }
    let typed = TypeInferrer::with_overrides(overrides.clone()).infer(&tree);
    Ok(emit_mapping(&typed))
}
