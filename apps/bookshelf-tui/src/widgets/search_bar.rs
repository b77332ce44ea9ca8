//! Search box and tag filter selector.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use bookshelf_core::TagFilter;

use super::Palette;

pub struct SearchBar<'a> {
    term: &'a str,
    tag_filter: &'a TagFilter,
    tag_count: usize,
    editing: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, tag_filter: &'a TagFilter, tag_count: usize, editing: bool) -> Self {
        Self {
            term,
            tag_filter,
            tag_count,
            editing,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let mut spans = vec![Span::styled("> ", Style::default().fg(palette.accent))];
        if self.term.is_empty() && !self.editing {
            spans.push(Span::styled("Search by title, author, or tag…", palette.muted()));
        } else {
            spans.push(Span::raw(self.term.to_string()));
        }
        if self.editing {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        let search = Paragraph::new(Line::from(spans)).style(palette.base()).block(
            Block::default()
                .title("Search")
                .borders(Borders::ALL)
                .border_style(palette.border(self.editing)),
        );
        frame.render_widget(search, chunks[0]);

        let filter = Paragraph::new(Line::from(vec![
            Span::styled(
                self.tag_filter.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({} tags)", self.tag_count), palette.muted()),
        ]))
        .style(palette.base())
        .block(
            Block::default()
                .title("Tag (t/T)")
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
        frame.render_widget(filter, chunks[1]);
    }
}
