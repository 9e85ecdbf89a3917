//! Shape tree and document merging
//!
//! Folds sample documents into a single tree mirroring their field layout.
//! Leaf nodes accumulate every raw scalar value observed for that field
//! path across all samples; inference later inspects the full sequence.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// A node of the merged shape tree
///
/// A node is either purely internal (named children) or purely a leaf
/// (accumulated scalar values). A field path used both ways across
/// documents is rejected at merge time.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeNode {
    /// Intermediate node with named children
    Internal(BTreeMap<String, ShapeNode>),
    /// Leaf accumulator of raw scalar values, in observation order
    Leaf(Vec<Value>),
}

impl ShapeNode {
    /// The accumulated values, if this is a leaf
    pub fn as_leaf(&self) -> Option<&[Value]> {
        match self {
            ShapeNode::Leaf(items) => Some(items),
            ShapeNode::Internal(_) => None,
        }
    }

    /// The named children, if this is an internal node
    pub fn as_internal(&self) -> Option<&BTreeMap<String, ShapeNode>> {
        match self {
            ShapeNode::Internal(children) => Some(children),
            ShapeNode::Leaf(_) => None,
        }
    }
}

/// The merged field layout of all sample documents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeTree {
    root: BTreeMap<String, ShapeNode>,
}

impl ShapeTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed document into the tree
    ///
    /// Objects recurse per key. Arrays are flattened: scalar elements land
    /// in the same accumulator a single scalar would, while object or array
    /// elements are silently dropped (arrays of structured values are not
    /// representable). `null` never creates a field. A root-level array
    /// merges each object element as its own document.
    pub fn merge(&mut self, document: &Value) -> Result<()> {
        match document {
            Value::Object(map) => {
                for (key, value) in map {
                    merge_field(&mut self.root, "", key, value)?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for item in items {
                    if item.is_object() {
                        self.merge(item)?;
                    }
                }
                Ok(())
            }
            // A bare scalar root has no field name to accumulate under
            _ => Ok(()),
        }
    }

    /// Top-level fields
    pub fn root(&self) -> &BTreeMap<String, ShapeNode> {
        &self.root
    }

    /// True if no field was ever collected
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a node by dotted path
    pub fn node(&self, path: &str) -> Option<&ShapeNode> {
        let mut parts = path.split('.');
        let mut current = self.root.get(parts.next()?)?;
        for part in parts {
            current = current.as_internal()?.get(part)?;
        }
        Some(current)
    }
}

/// Join a dotted path with a child field name
pub(crate) fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn merge_field(
    parent: &mut BTreeMap<String, ShapeNode>,
    path: &str,
    name: &str,
    value: &Value,
) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Object(map) => {
            let child_path = join_path(path, name);
            let node = parent
                .entry(name.to_string())
                .or_insert_with(|| ShapeNode::Internal(BTreeMap::new()));
            let ShapeNode::Internal(children) = node else {
                return Err(Error::ambiguous_field(child_path));
            };
            for (key, child) in map {
                merge_field(children, &child_path, key, child)?;
            }
            // A child that collected nothing (only nulls or unsupported
            // shapes) must not surface in the mapping
            let empty = children.is_empty();
            if empty {
                parent.remove(name);
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    // Arrays of objects or arrays are not representable
                    Value::Object(_) | Value::Array(_) => {}
                    scalar => merge_field(parent, path, name, scalar)?,
                }
            }
            Ok(())
        }
        scalar => {
            let node = parent
                .entry(name.to_string())
                .or_insert_with(|| ShapeNode::Leaf(Vec::new()));
            match node {
                ShapeNode::Leaf(items) => {
                    items.push(scalar.clone());
                    Ok(())
                }
                ShapeNode::Internal(_) => Err(Error::ambiguous_field(join_path(path, name))),
            }
        }
    }
}
