//! Caller-supplied type overrides
//!
//! An override fixes the type of one dotted field path verbatim, bypassing
//! inference. Overrides come from inline `field:type` specs or a YAML file
//! of `path: type` pairs. Paths never present in the samples are silently
//! unused.

use crate::error::{Error, Result};
use crate::mapping::FieldType;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Dotted field path to forced type
#[derive(Debug, Clone, Default)]
pub struct TypeOverrides {
    by_path: BTreeMap<String, FieldType>,
}

impl TypeOverrides {
    /// Create an empty override map
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a type for a dotted field path
    pub fn set(&mut self, path: impl Into<String>, field_type: FieldType) {
        self.by_path.insert(path.into(), field_type);
    }

    /// Look up the forced type for a dotted field path
    pub fn get(&self, path: &str) -> Option<&FieldType> {
        self.by_path.get(path)
    }

    /// True if no override is set
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Add one `field:type` spec, e.g. `fragment.location:geo_point`
    pub fn add_spec(&mut self, spec: &str) -> Result<()> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(Error::invalid_field_mapping(spec));
        }
        self.set(parts[0], FieldType::parse(parts[1]));
        Ok(())
    }

    /// Build from a list of `field:type` specs
    pub fn from_specs(specs: &[String]) -> Result<Self> {
        let mut overrides = Self::new();
        for spec in specs {
            overrides.add_spec(spec)?;
        }
        Ok(overrides)
    }

    /// Load from a YAML file of `path: type` pairs
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::config(format!(
                    "Failed to read field mapping file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse from a YAML string of `path: type` pairs
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(yaml)?;
        let mut overrides = Self::new();
        for (path, tag) in raw {
            overrides.set(path, FieldType::parse(&tag));
        }
        Ok(overrides)
    }

    /// Merge another override map in; its entries win on conflict
    pub fn extend(&mut self, other: TypeOverrides) {
        self.by_path.extend(other.by_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_spec() {
        let mut overrides = TypeOverrides::new();
        overrides.add_spec("fragment.location:geo_point").unwrap();

        assert_eq!(
            overrides.get("fragment.location"),
            Some(&FieldType::GeoPoint)
        );
        assert_eq!(overrides.get("fragment"), None);
    }

    #[test]
    fn test_invalid_specs_rejected() {
        let mut overrides = TypeOverrides::new();
        assert!(overrides.add_spec("no-separator").is_err());
        assert!(overrides.add_spec("too:many:parts").is_err());
        assert!(overrides.add_spec(":keyword").is_err());
        assert!(overrides.add_spec("field:").is_err());
    }

    #[test]
    fn test_unknown_type_accepted_verbatim() {
        let mut overrides = TypeOverrides::new();
        overrides.add_spec("field:half_float").unwrap();

        assert_eq!(
            overrides.get("field"),
            Some(&FieldType::Custom("half_float".to_string()))
        );
    }

    #[test]
    fn test_from_yaml_str() {
        let overrides = TypeOverrides::from_yaml_str(
            "location: geo_point\ncreated: date-epoch_second\n",
        )
        .unwrap();

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("location"), Some(&FieldType::GeoPoint));
        assert_eq!(overrides.get("created"), Some(&FieldType::DateEpochSecond));
    }

    #[test]
    fn test_extend_later_wins() {
        let mut base = TypeOverrides::new();
        base.set("field", FieldType::Text);
        let mut winning = TypeOverrides::new();
        winning.set("field", FieldType::Keyword);

        base.extend(winning);
        assert_eq!(base.get("field"), Some(&FieldType::Keyword));
    }

    #[test]
    fn test_missing_file() {
        let err = TypeOverrides::from_yaml_file("/nonexistent/overrides.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
