//! Type inference over the merged shape tree
//!
//! Walks the tree once and resolves a [`FieldType`] for every node from its
//! accumulated values and local field name. Caller overrides win on exact
//! dotted-path match and make the field terminal. Unclassifiable values
//! degrade to `UNDEFINED` or `text`, never to an error.

use super::tree::{join_path, ShapeNode, ShapeTree};
use super::types::{FieldType, TypedNode, TypedTree};
use crate::overrides::TypeOverrides;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

/// Strings must all be shorter than this to refine from `text` to `keyword`
pub const MAX_KEYWORD_LENGTH: usize = 100;

// Plausible Unix epoch bounds, exclusive
const EPOCH_SECOND_MIN: i64 = 631_152_000;
const EPOCH_SECOND_MAX: i64 = 4_102_444_800;
const EPOCH_MILLIS_MIN: i64 = 631_152_000_000;
const EPOCH_MILLIS_MAX: i64 = 4_102_444_800_000;

/// Resolves field types for a merged shape tree
#[derive(Debug, Clone, Default)]
pub struct TypeInferrer {
    overrides: TypeOverrides,
}

impl TypeInferrer {
    /// Create an inferrer without overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferrer honoring the given overrides
    pub fn with_overrides(overrides: TypeOverrides) -> Self {
        Self { overrides }
    }

    /// Assign a type to every node of the tree
    ///
    /// Pure function of the accumulated values and the overrides: running
    /// it twice on the same tree yields the same result.
    pub fn infer(&self, tree: &ShapeTree) -> TypedTree {
        TypedTree {
            root: self.infer_children(tree.root(), ""),
        }
    }

    fn infer_children(
        &self,
        children: &BTreeMap<String, ShapeNode>,
        path: &str,
    ) -> BTreeMap<String, TypedNode> {
        children
            .iter()
            .map(|(name, node)| {
                let child_path = join_path(path, name);
                let typed = self.infer_node(node, &child_path, name);
                (name.clone(), typed)
            })
            .collect()
    }

    fn infer_node(&self, node: &ShapeNode, path: &str, name: &str) -> TypedNode {
        // An overridden field is terminal, never examined for children
        if let Some(forced) = self.overrides.get(path) {
            return TypedNode::Field(forced.clone());
        }
        match node {
            ShapeNode::Leaf(items) => TypedNode::Field(infer_values(items, name)),
            ShapeNode::Internal(children) => match classify_geojson(children) {
                Some(geo) => TypedNode::Field(geo),
                None => TypedNode::Object(self.infer_children(children, path)),
            },
        }
    }
}

/// Infer a type from a field's accumulated value sequence and local name
///
/// The sequence-level rules require every element to share one JSON scalar
/// kind; mixed sequences are `UNDEFINED`. For strings, the geo/date
/// candidate is taken from the first element only, then the keyword length
/// refinement runs over the whole sequence.
pub fn infer_values(items: &[Value], name: &str) -> FieldType {
    if items.is_empty() {
        return FieldType::Undefined;
    }
    if items.iter().all(Value::is_boolean) {
        return FieldType::Boolean;
    }
    if items.iter().all(is_integer) {
        if has_epoch_name_marker(name) {
            if let Some(epoch) = classify_epoch(items) {
                return epoch;
            }
        }
        return FieldType::Long;
    }
    if items.iter().all(is_float) {
        return FieldType::Double;
    }
    if items.iter().all(Value::is_string) {
        let first = items[0].as_str().unwrap_or_default();
        let candidate = infer_string(first, name);
        if candidate == FieldType::Text {
            let all_short = items
                .iter()
                .filter_map(Value::as_str)
                .all(|s| s.chars().count() < MAX_KEYWORD_LENGTH);
            return if all_short {
                FieldType::Keyword
            } else {
                FieldType::Text
            };
        }
        return candidate;
    }
    FieldType::Undefined
}

/// Infer a type from a single string value and its field's local name
pub fn infer_string(value: &str, name: &str) -> FieldType {
    // Geo values ...
    if value.starts_with("POINT ") && parse_wkt_point(value) {
        return FieldType::GeoPoint;
    }
    if WKT_SHAPE_KEYWORDS.iter().any(|k| value.starts_with(k)) && parse_wkt_shape(value) {
        return FieldType::GeoShape;
    }
    if name.contains("geohash") {
        return FieldType::GeoPoint;
    }
    if is_coordinate_pair(value) {
        return FieldType::GeoPoint;
    }
    // Date values ...
    if has_date_name_hint(name) && parses_as_datetime(value) {
        return FieldType::Date;
    }
    FieldType::Text
}

/// Classify an internal node shaped like GeoJSON
///
/// Matches nodes holding a `type` leaf of geometry kind strings, with at
/// most a `coordinates` sibling. The `coordinates` child is absent for
/// polygon-like geometries, whose nested coordinate arrays never
/// accumulate in the shape tree. Returns `None` when the node is an
/// ordinary object and should be recursed into.
fn classify_geojson(children: &BTreeMap<String, ShapeNode>) -> Option<FieldType> {
    if children.keys().any(|k| k != "type" && k != "coordinates") {
        return None;
    }
    let type_values = children.get("type")?.as_leaf()?;
    let mut kinds = Vec::with_capacity(type_values.len());
    for value in type_values {
        kinds.push(value.as_str()?.to_lowercase());
    }
    if kinds.is_empty() {
        return None;
    }
    if kinds.iter().all(|k| k == "point") {
        return Some(FieldType::GeoPoint);
    }
    if kinds.iter().all(|k| GEOJSON_SHAPE_KINDS.contains(&k.as_str())) {
        return Some(FieldType::GeoShape);
    }
    None
}

const GEOJSON_SHAPE_KINDS: [&str; 7] = [
    "point",
    "multipoint",
    "linestring",
    // "multistring" is accepted alongside the correct token; some feeds
    // carry it for MultiLineString geometries
    "multistring",
    "multilinestring",
    "polygon",
    "multipolygon",
];

const WKT_SHAPE_KEYWORDS: [&str; 5] = [
    "LINESTRING ",
    "POLYGON ",
    "MULTIPOINT ",
    "MULTILINESTRING ",
    "MULTIPOLYGON ",
];

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

fn is_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_f64(),
        _ => false,
    }
}

/// Name markers that make an integer field a candidate epoch date
fn has_epoch_name_marker(name: &str) -> bool {
    ["timestamp", "_date", "date_", "start_", "_start", "_end", "end_"]
        .iter()
        .any(|marker| name.contains(marker))
}

/// Name hints that make a string field a candidate calendar date
fn has_date_name_hint(name: &str) -> bool {
    ["timestamp", "date", "start", "end"]
        .iter()
        .any(|hint| name.contains(hint))
}

/// Classify homogeneous integers as an epoch date when every value falls
/// inside the plausible seconds range, or failing that the milliseconds
/// range
fn classify_epoch(items: &[Value]) -> Option<FieldType> {
    let values: Option<Vec<i64>> = items.iter().map(Value::as_i64).collect();
    let values = values?;
    if values
        .iter()
        .all(|&x| x > EPOCH_SECOND_MIN && x < EPOCH_SECOND_MAX)
    {
        return Some(FieldType::DateEpochSecond);
    }
    if values
        .iter()
        .all(|&x| x > EPOCH_MILLIS_MIN && x < EPOCH_MILLIS_MAX)
    {
        return Some(FieldType::DateEpochMillis);
    }
    None
}

// Detection helpers

static WKT_POINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^POINT\s+\(\s*(\S+)\s+(\S+)\s*\)\s*$").unwrap());

fn parse_wkt_point(value: &str) -> bool {
    WKT_POINT_RE
        .captures(value)
        .is_some_and(|caps| caps[1].parse::<f64>().is_ok() && caps[2].parse::<f64>().is_ok())
}

/// Validate the body of a non-point WKT geometry: balanced parentheses and
/// comma-separated groups of two or more numeric coordinates
fn parse_wkt_shape(value: &str) -> bool {
    let Some(open) = value.find('(') else {
        return false;
    };
    let body = &value[open..];

    let mut depth = 0i32;
    for c in body.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return false;
    }

    body.split(|c| c == '(' || c == ')' || c == ',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .all(|group| {
            let coords: Vec<&str> = group.split_whitespace().collect();
            coords.len() >= 2 && coords.iter().all(|c| c.parse::<f64>().is_ok())
        })
}

/// A comma-separated pair of two numeric tokens, e.g. `"48.85, 2.35"`
fn is_coordinate_pair(value: &str) -> bool {
    let parts: Vec<&str> = value.split(',').collect();
    parts.len() == 2 && parts.iter().all(|p| p.trim().parse::<f64>().is_ok())
}

fn parses_as_datetime(value: &str) -> bool {
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }
    if DateTime::parse_from_rfc2822(value).is_ok() {
        return true;
    }

    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    if DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
    {
        return true;
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%Y%m%d"];
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}
