//! Bookmarked books, in catalog order.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph, Wrap},
    Frame,
};

use bookshelf_core::Record;

use super::{card_item, next_index, prev_index};
use crate::widgets::Palette;

/// Bookmarks panel state
#[derive(Debug, Default)]
pub struct BookmarksView {
    /// Currently selected bookmark index
    pub selected: usize,
}

impl BookmarksView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }

    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        records: &[&Record],
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(format!("Bookmarks ({})", records.len()))
            .borders(Borders::ALL)
            .border_style(palette.border(focused));

        if records.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No bookmarks yet. Start exploring books!",
                palette.muted(),
            )))
            .style(palette.base())
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<_> = records
            .iter()
            .map(|record| card_item(record, true, palette))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(palette.base())
            .highlight_style(Style::default().bg(palette.highlight_bg));

        let mut state = ListState::default().with_selected(focused.then_some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
