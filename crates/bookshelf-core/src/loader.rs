//! Catalog loading.
//!
//! The catalog resource is a JSON array of `{id, title, author, year, tags}`
//! objects. Loading decodes it and normalizes every entry into a [`Record`].

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::LoadError;
use crate::record::{RawRecord, Record};

/// Sample catalog bundled with the library.
pub const BUNDLED_CATALOG: &str = include_str!("../data/books.json");

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The sample catalog compiled into the library
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
    /// A JSON document already in memory
    Inline(String),
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Bundled
    }
}

impl CatalogSource {
    /// Load and normalize every record from this source.
    pub fn load(&self) -> Result<Vec<Record>, LoadError> {
        let records = match self {
            CatalogSource::Bundled => parse_records(BUNDLED_CATALOG)?,
            CatalogSource::Inline(json) => parse_records(json)?,
            CatalogSource::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_records(&content)?
            }
        };
        tracing::debug!("Loaded {} records from {}", records.len(), self);
        Ok(records)
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Inline(_) => write!(f, "inline catalog"),
        }
    }
}

/// Decode a catalog document and normalize its records.
///
/// Fails if the document is not a record array or if two records share an id.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoadError> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw.len());
    for r in &raw {
        if !seen.insert(r.id.as_str()) {
            return Err(LoadError::DuplicateId(r.id.clone()));
        }
    }

    Ok(raw.into_iter().map(Record::from_raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let records = CatalogSource::Bundled.load().unwrap();
        assert!(!records.is_empty());
        assert_eq!(records[0].id, "b1");
    }

    #[test]
    fn inline_preserves_order() {
        let json = r#"[
            {"id":"z","title":"Z","author":"A","year":2000,"tags":[]},
            {"id":"a","title":"A","author":"B","year":2001,"tags":["ml"]}
        ]"#;
        let records = CatalogSource::Inline(json.to_string()).load().unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert_eq!(records[1].icon, "🤖");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id":"x","title":"One","author":"A","year":2000},
            {"id":"x","title":"Two","author":"B","year":2001}
        ]"#;
        match parse_records(json) {
            Err(LoadError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(matches!(parse_records("{not json"), Err(LoadError::Decode(_))));
        assert!(matches!(parse_records(r#"{"id":"x"}"#), Err(LoadError::Decode(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/bookshelf/books.json"));
        assert!(matches!(source.load(), Err(LoadError::Io { .. })));
    }
}
