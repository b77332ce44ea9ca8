//! Search and tag filtering over catalog records.
//!
//! A [`Query`] combines a free-text term with a [`TagFilter`]:
//!
//! - the term matches case-insensitively as a substring of the title,
//!   the author, or any tag; an empty term matches everything
//! - the tag filter matches a record whose tag list contains the exact
//!   tag (case-sensitive)
//!
//! A record is selected when both hold. Filtering never reorders.

use crate::record::Record;

/// Restrict results to one exact tag, or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    /// Every record passes
    #[default]
    All,
    /// Record's tag list must contain this exact tag
    Tag(String),
}

impl TagFilter {
    /// Interpret a selector value, where the empty string means no filter.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }

    /// The selected tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            TagFilter::All => None,
            TagFilter::Tag(t) => Some(t),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(t) => record.has_tag(t),
        }
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagFilter::All => write!(f, "All Tags"),
            TagFilter::Tag(t) => write!(f, "{}", t),
        }
    }
}

/// Current search term and tag filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    term: String,
    needle: String,
    tag_filter: TagFilter,
}

impl Query {
    pub fn new(term: &str, tag_filter: TagFilter) -> Self {
        Self {
            term: term.to_string(),
            needle: term.to_lowercase(),
            tag_filter,
        }
    }

    /// The term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn tag_filter(&self) -> &TagFilter {
        &self.tag_filter
    }

    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
        self.needle = term.to_lowercase();
    }

    pub fn set_tag_filter(&mut self, tag_filter: TagFilter) {
        self.tag_filter = tag_filter;
    }

    /// Whether this query selects every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty() && self.tag_filter == TagFilter::All
    }

    /// Whether `record` satisfies both the term and the tag filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_term(record) && self.tag_filter.matches(record)
    }

    fn matches_term(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.title.to_lowercase().contains(&self.needle)
            || record.author.to_lowercase().contains(&self.needle)
            || record
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&self.needle))
    }

    /// Matching records, in input order.
    pub fn select<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Positions of matching records, in input order.
    pub fn select_indices(&self, records: &[Record]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(r))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Filter `records` by a free-text term and a tag filter.
pub fn query<'a>(records: &'a [Record], term: &str, tag_filter: &TagFilter) -> Vec<&'a Record> {
    Query::new(term, tag_filter.clone()).select(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;

    fn records() -> Vec<Record> {
        vec![
            Record::from_raw(RawRecord {
                id: "b1".to_string(),
                title: "Clean Code".to_string(),
                author: "Robert Martin".to_string(),
                year: 2008,
                tags: vec!["design".to_string()],
            }),
            Record::from_raw(RawRecord {
                id: "b2".to_string(),
                title: "Deep Learning".to_string(),
                author: "Ian Goodfellow".to_string(),
                year: 2016,
                tags: vec!["ml".to_string(), "Python".to_string()],
            }),
        ]
    }

    fn ids(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn selection_value_maps_to_filter() {
        assert_eq!(TagFilter::from_selection(""), TagFilter::All);
        assert_eq!(TagFilter::from_selection("ml"), TagFilter::Tag("ml".to_string()));
    }

    #[test]
    fn term_matches_author_and_tags() {
        let records = records();
        assert_eq!(ids(&query(&records, "goodfellow", &TagFilter::All)), vec!["b2"]);
        assert_eq!(ids(&query(&records, "PYTH", &TagFilter::All)), vec!["b2"]);
        assert_eq!(ids(&query(&records, "sig", &TagFilter::All)), vec!["b1"]);
    }

    #[test]
    fn tag_filter_is_case_sensitive() {
        let records = records();
        assert!(query(&records, "", &TagFilter::Tag("python".to_string())).is_empty());
        assert_eq!(
            ids(&query(&records, "", &TagFilter::Tag("Python".to_string()))),
            vec!["b2"]
        );
    }

    #[test]
    fn select_indices_follow_order() {
        let records = records();
        let q = Query::new("e", TagFilter::All);
        assert_eq!(q.select_indices(&records), vec![0, 1]);
    }

    #[test]
    fn empty_query() {
        assert!(Query::default().is_empty());
        assert!(!Query::new("x", TagFilter::All).is_empty());
        assert!(!Query::new("", TagFilter::Tag("ml".to_string())).is_empty());
    }
}
