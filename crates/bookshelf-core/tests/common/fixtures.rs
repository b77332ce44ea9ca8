//! Test fixture loading utilities

use std::path::PathBuf;

use bookshelf_core::{parse_records, RawRecord, Record};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The two-book catalog used by the scenario tests
#[allow(dead_code)]
pub fn scenario_records() -> Vec<Record> {
    parse_records(&load_fixture("scenario.json")).expect("scenario fixture parses")
}

/// Build a record without going through JSON
#[allow(dead_code)]
pub fn record(id: &str, title: &str, author: &str, tags: &[&str]) -> Record {
    Record::from_raw(RawRecord {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        year: 2000,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    })
}
