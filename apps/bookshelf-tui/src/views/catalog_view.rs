//! Card list of books matching the current search and tag filter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph, Wrap},
    Frame,
};

use bookshelf_core::SessionView;

use super::{card_item, next_index, prev_index};
use crate::widgets::Palette;

/// Catalog view state
#[derive(Debug, Default)]
pub struct CatalogView {
    /// Currently selected card index
    pub selected: usize,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Render the catalog view
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &SessionView<'_>,
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(format!("Books ({})", view.matches.len()))
            .borders(Borders::ALL)
            .border_style(palette.border(focused));

        if let Some(err) = view.load_error {
            let text = vec![
                Line::from(Span::styled(
                    "Error loading books. Please check the catalog and restart.",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(err.to_string(), palette.muted())),
            ];
            let paragraph = Paragraph::new(text)
                .style(palette.base())
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        if view.matches.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No books found. Try a different search or tag.",
                palette.muted(),
            )))
            .style(palette.base())
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<_> = view
            .matches
            .iter()
            .map(|record| card_item(record, view.is_bookmarked(&record.id), palette))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(palette.base())
            .highlight_style(Style::default().bg(palette.highlight_bg));

        let mut state = ListState::default().with_selected(focused.then_some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
