//! Read-only catalog index.

use std::collections::BTreeSet;

use crate::bookmarks::BookmarkStore;
use crate::record::Record;

/// The loaded collection plus its distinct tags.
///
/// Built once per load and never patched; a reload builds a new index.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: Vec<Record>,
    tags: Vec<String>,
}

impl CatalogIndex {
    /// Wrap `records` and collect their distinct tags in lexicographic order.
    pub fn build(records: Vec<Record>) -> Self {
        let tags: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .collect();
        let tags = tags.into_iter().map(str::to_string).collect();
        Self { records, tags }
    }

    /// An index with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct tags, case-sensitive, sorted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Find a record by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Bookmarked records, in catalog order.
    pub fn bookmarked<'a>(
        &'a self,
        bookmarks: &'a BookmarkStore,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |r| bookmarks.is_bookmarked(&r.id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
