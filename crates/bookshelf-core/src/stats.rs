//! Summary counts shown alongside results.

/// Format `count` with the singular noun for exactly one, plural otherwise.
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {}", count, noun)
}

/// Counts behind the stats line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    /// Records matching the current query
    pub shown: usize,
    /// Bookmarked ids
    pub bookmarks: usize,
    /// Records in the catalog
    pub total: usize,
}

impl CatalogStats {
    pub fn new(shown: usize, bookmarks: usize, total: usize) -> Self {
        Self {
            shown,
            bookmarks,
            total,
        }
    }

    /// `Showing 3 books • 1 bookmark`
    pub fn summary(&self) -> String {
        format!(
            "Showing {} • {}",
            count_label(self.shown, "book", "books"),
            count_label(self.bookmarks, "bookmark", "bookmarks")
        )
    }

    /// `12 Books`
    pub fn total_label(&self) -> String {
        count_label(self.total, "Book", "Books")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 books", "0 bookmarks")]
    #[case(1, "1 book", "1 bookmark")]
    #[case(2, "2 books", "2 bookmarks")]
    fn pluralizes(#[case] count: usize, #[case] books: &str, #[case] bookmarks: &str) {
        assert_eq!(count_label(count, "book", "books"), books);
        assert_eq!(count_label(count, "bookmark", "bookmarks"), bookmarks);
    }

    #[test]
    fn summary_pairs_both_counts() {
        assert_eq!(CatalogStats::new(1, 0, 5).summary(), "Showing 1 book • 0 bookmarks");
        assert_eq!(CatalogStats::new(7, 1, 9).summary(), "Showing 7 books • 1 bookmark");
    }

    #[test]
    fn total_label_is_capitalised() {
        assert_eq!(CatalogStats::new(0, 0, 1).total_label(), "1 Book");
        assert_eq!(CatalogStats::new(0, 0, 14).total_label(), "14 Books");
    }
}
