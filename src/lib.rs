// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # Mapforge
//!
//! Infers a search-engine index mapping from a handful of NDJSON sample
//! documents: merges their structure into one shape tree, resolves a
//! concrete type per field (with geographic and temporal special cases and
//! caller overrides), and emits the mapping document with the auxiliary
//! fulltext/autocomplete fields.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapforge::{infer_mapping, sample, TypeOverrides, Result};
//!
//! fn main() -> Result<()> {
//!     let documents = sample::read_samples("data.ndjson", 5)?;
//!
//!     let mut overrides = TypeOverrides::new();
//!     overrides.add_spec("fragment.location:geo_point")?;
//!
//!     let mapping = infer_mapping(&documents, &overrides)?;
//!     println!("{}", mapping.to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! NDJSON samples ──► Shape Merger ──► Type Inferrer ──► Mapping Emitter
//!                    (per-field       (value heuristics  (descriptors +
//!                     accumulators)    + overrides)       internal fields)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Shape merging, type inference and mapping emission
pub mod mapping;

/// Caller-supplied type overrides
pub mod overrides;

/// NDJSON document sampling
pub mod sample;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use mapping::{infer_mapping, FieldType, MappingDocument, ShapeTree, TypeInferrer};
pub use overrides::TypeOverrides;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
