//! TUI views

mod bookmarks_view;
mod catalog_view;
mod detail_view;

pub use bookmarks_view::BookmarksView;
pub use catalog_view::CatalogView;
pub use detail_view::DetailView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use bookshelf_core::Record;

use crate::widgets::Palette;

/// Two-line card for a book in a list.
pub(crate) fn card_item(
    record: &Record,
    bookmarked: bool,
    palette: &Palette,
) -> ListItem<'static> {
    let marker = if bookmarked {
        Span::styled(" 🔖", Style::default().fg(palette.bookmark))
    } else {
        Span::raw("")
    };
    let title = Line::from(vec![
        Span::raw(format!("{} ", record.icon)),
        Span::styled(
            record.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        marker,
    ]);
    let detail = Line::from(vec![
        Span::styled(format!("   by {}", record.author), palette.muted()),
        Span::styled(
            if record.tags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", record.tags.join("] ["))
            },
            Style::default().fg(palette.accent),
        ),
    ]);
    ListItem::new(vec![title, detail])
}

/// Move a selection one step down, wrapping.
pub(crate) fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Move a selection one step up, wrapping.
pub(crate) fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
