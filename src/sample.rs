//! NDJSON document sampling
//!
//! Reads the first lines of a line-delimited JSON file, one parsed document
//! per line. The inference heuristic is tuned for a handful of documents,
//! not a full scan; the count is caller-controlled.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read up to `count` sample documents from an NDJSON file
///
/// Blank lines are skipped and do not count toward the sample. A line that
/// is not valid JSON is an error carrying its line number.
pub fn read_samples(path: impl AsRef<Path>, count: usize) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    let mut documents = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if documents.len() >= count {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let document: Value = serde_json::from_str(&line)
            .map_err(|e| Error::invalid_document(index + 1, e.to_string()))?;
        documents.push(document);
    }

    debug!(
        documents = documents.len(),
        path = %path.display(),
        "sampled documents"
    );
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ndjson_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_requested_count() {
        let file = ndjson_file("{\"a\": 1}\n{\"a\": 2}\n{\"a\": 3}\n");
        let docs = read_samples(file.path(), 2).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["a"], 1);
        assert_eq!(docs[1]["a"], 2);
    }

    #[test]
    fn test_short_file() {
        let file = ndjson_file("{\"a\": 1}\n");
        let docs = read_samples(file.path(), 10).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = ndjson_file("{\"a\": 1}\n\n   \n{\"a\": 2}\n");
        let docs = read_samples(file.path(), 2).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_malformed_line_reports_number() {
        let file = ndjson_file("{\"a\": 1}\nnot json\n");
        let err = read_samples(file.path(), 5).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument { line: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_samples("/nonexistent/data.ndjson", 2).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
