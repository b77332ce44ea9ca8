//! Session state for one run of the browser.
//!
//! A [`Session`] owns the catalog, bookmarks, theme and current query.
//! Every operation that changes what the user sees recomputes the match
//! list before returning, so [`Session::view`] is always ready to draw.

use std::sync::Arc;

use crate::bookmarks::BookmarkStore;
use crate::catalog::CatalogIndex;
use crate::error::{LoadError, StorageError};
use crate::loader::CatalogSource;
use crate::query::{Query, TagFilter};
use crate::record::Record;
use crate::stats::CatalogStats;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemePreference};

/// State owned by a single browsing session.
#[derive(Debug)]
pub struct Session {
    catalog: CatalogIndex,
    bookmarks: BookmarkStore,
    theme: ThemePreference,
    query: Query,
    matches: Vec<usize>,
    load_error: Option<LoadError>,
}

impl Session {
    /// Load the catalog from `source` and open persisted state from `store`.
    ///
    /// A failed load leaves the catalog empty and records the error for
    /// display; the session is still usable.
    pub fn start(source: &CatalogSource, store: Arc<dyn KeyValueStore>) -> Self {
        match source.load() {
            Ok(records) => Self::from_records(records, store),
            Err(e) => {
                tracing::error!("Error loading books from {}: {}", source, e);
                let mut session = Self::from_records(Vec::new(), store);
                session.load_error = Some(e);
                session
            }
        }
    }

    /// Build a session around already-loaded records.
    pub fn from_records(records: Vec<Record>, store: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogIndex::build(records);
        let bookmarks = BookmarkStore::open(store.clone());
        let theme = ThemePreference::open(store);
        let mut session = Self {
            catalog,
            bookmarks,
            theme,
            query: Query::default(),
            matches: Vec::new(),
            load_error: None,
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The error that emptied the catalog, if loading failed.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Replace the search term.
    pub fn set_term(&mut self, term: &str) {
        self.query.set_term(term);
        self.refresh();
    }

    pub fn clear_term(&mut self) {
        self.set_term("");
    }

    /// Replace the tag filter.
    pub fn set_tag_filter(&mut self, tag_filter: TagFilter) {
        self.query.set_tag_filter(tag_filter);
        self.refresh();
    }

    /// Step the tag filter through `All` and then each catalog tag in order,
    /// wrapping around.
    pub fn cycle_tag_filter(&mut self, forward: bool) {
        let tags = self.catalog.tags();
        // Position 0 is "All", tag i is position i + 1.
        let positions = tags.len() + 1;
        let current = match self.query.tag_filter() {
            TagFilter::All => 0,
            TagFilter::Tag(t) => tags.iter().position(|x| x == t).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (current + 1) % positions
        } else {
            (current + positions - 1) % positions
        };
        let filter = match next {
            0 => TagFilter::All,
            i => TagFilter::Tag(tags[i - 1].clone()),
        };
        self.set_tag_filter(filter);
    }

    /// Flip the bookmark on `id`. Returns the new membership.
    pub fn toggle_bookmark(&mut self, id: &str) -> Result<bool, StorageError> {
        self.bookmarks.toggle(id)
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.theme.toggle()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.is_bookmarked(id)
    }

    /// Look up a record for the details view.
    pub fn record(&self, id: &str) -> Option<&Record> {
        self.catalog.get(id)
    }

    /// Records matching the current query, in catalog order.
    pub fn matches(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.catalog.records();
        self.matches.iter().map(move |&i| &records[i])
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Bookmarked records, in catalog order.
    pub fn bookmarked_records(&self) -> Vec<&Record> {
        self.catalog.bookmarked(&self.bookmarks).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::new(self.matches.len(), self.bookmarks.len(), self.catalog.len())
    }

    /// Everything a renderer needs for the current state.
    pub fn view(&self) -> SessionView<'_> {
        let stats = self.stats();
        SessionView {
            matches: self.matches().collect(),
            summary: stats.summary(),
            total_label: stats.total_label(),
            tags: self.catalog.tags(),
            term: self.query.term(),
            tag_filter: self.query.tag_filter(),
            load_error: self.load_error.as_ref(),
            theme: self.theme(),
            bookmarks: &self.bookmarks,
        }
    }

    fn refresh(&mut self) {
        self.matches = self.query.select_indices(self.catalog.records());
        tracing::trace!(
            "Query {:?} / {} -> {} matches",
            self.query.term(),
            self.query.tag_filter(),
            self.matches.len()
        );
    }
}

/// A render-ready snapshot of a [`Session`].
pub struct SessionView<'a> {
    /// Records matching the current query
    pub matches: Vec<&'a Record>,
    /// `Showing N books • M bookmarks`
    pub summary: String,
    /// `N Books`
    pub total_label: String,
    /// Selectable tag filter values
    pub tags: &'a [String],
    pub term: &'a str,
    pub tag_filter: &'a TagFilter,
    pub load_error: Option<&'a LoadError>,
    pub theme: Theme,
    bookmarks: &'a BookmarkStore,
}

impl SessionView<'_> {
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.is_bookmarked(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session() -> Session {
        let json = r#"[
            {"id":"b1","title":"Clean Code","author":"Robert Martin","year":2008,"tags":["design"]},
            {"id":"b2","title":"Deep Learning","author":"Ian Goodfellow","year":2016,"tags":["ml"]},
            {"id":"b3","title":"Pro Git","author":"Scott Chacon","year":2014,"tags":["git","cli"]}
        ]"#;
        Session::start(
            &CatalogSource::Inline(json.to_string()),
            Arc::new(MemoryStore::new()),
        )
    }

    fn match_ids(session: &Session) -> Vec<&str> {
        session.matches().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let session = session();
        assert_eq!(match_ids(&session), vec!["b1", "b2", "b3"]);
        assert_eq!(session.view().summary, "Showing 3 books • 0 bookmarks");
        assert_eq!(session.view().total_label, "3 Books");
    }

    #[test]
    fn term_and_filter_combine() {
        let mut session = session();
        session.set_term("o");
        assert_eq!(match_ids(&session), vec!["b1", "b2", "b3"]);
        session.set_tag_filter(TagFilter::Tag("git".to_string()));
        assert_eq!(match_ids(&session), vec!["b3"]);
        session.clear_term();
        session.set_tag_filter(TagFilter::All);
        assert_eq!(session.match_count(), 3);
    }

    #[test]
    fn cycle_walks_all_then_tags() {
        let mut session = session();
        assert_eq!(session.catalog().tags(), ["cli", "design", "git", "ml"]);

        session.cycle_tag_filter(true);
        assert_eq!(session.query().tag_filter().tag(), Some("cli"));
        session.cycle_tag_filter(false);
        assert_eq!(*session.query().tag_filter(), TagFilter::All);
        session.cycle_tag_filter(false);
        assert_eq!(session.query().tag_filter().tag(), Some("ml"));
        assert_eq!(match_ids(&session), vec!["b2"]);
    }

    #[test]
    fn bookmarking_does_not_change_matches() {
        let mut session = session();
        session.set_term("deep");
        assert!(session.toggle_bookmark("b1").unwrap());
        assert_eq!(match_ids(&session), vec!["b2"]);

        let view = session.view();
        assert!(view.is_bookmarked("b1"));
        assert_eq!(view.summary, "Showing 1 book • 1 bookmark");

        let bookmarked: Vec<_> = session
            .bookmarked_records()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(bookmarked, vec!["b1"]);
    }

    #[test]
    fn failed_load_leaves_empty_catalog() {
        let session = Session::start(
            &CatalogSource::Inline("not json".to_string()),
            Arc::new(MemoryStore::new()),
        );
        assert!(session.catalog().is_empty());
        assert!(matches!(session.load_error(), Some(LoadError::Decode(_))));
        assert_eq!(session.view().summary, "Showing 0 books • 0 bookmarks");
    }
}
