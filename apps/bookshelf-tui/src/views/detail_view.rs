//! Details modal for a single book.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use bookshelf_core::Record;

use super::centered_rect;
use crate::widgets::Palette;

pub struct DetailView;

impl DetailView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        record: &Record,
        bookmarked: bool,
        palette: &Palette,
    ) {
        let bookmark_line = if bookmarked {
            Span::styled(
                "🔖 Bookmarked  (b to remove)",
                Style::default()
                    .fg(palette.bookmark)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("🔖 Bookmark  (b to add)", palette.muted())
        };

        let text = vec![
            Line::from(record.icon).alignment(Alignment::Center),
            Line::from(Span::styled(
                record.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                format!("by {} • {}", record.author, record.year),
                palette.muted(),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                record.genre.clone(),
                Style::default().fg(palette.accent),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                record
                    .tags
                    .iter()
                    .map(|t| format!("[{}]", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                Style::default().fg(palette.accent),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(record.description.clone()),
            Line::from(""),
            Line::from(bookmark_line).alignment(Alignment::Center),
        ];

        let block = Block::default()
            .title("Details (Esc to close)")
            .borders(Borders::ALL)
            .border_style(palette.border(true));

        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text)
                .style(palette.base())
                .wrap(Wrap { trim: true })
                .block(block),
            popup,
        );
    }
}
