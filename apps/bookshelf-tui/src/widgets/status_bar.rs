//! Stats line with the current mode.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::mode::Mode;

use super::Palette;

pub struct StatusBar<'a> {
    mode: Mode,
    summary: &'a str,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: Mode, summary: &'a str, message: Option<&'a str>) -> Self {
        Self {
            mode,
            summary,
            message,
        }
    }

    /// Get the display color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Search => Color::Green,
            Mode::Detail => Color::Magenta,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode.short_code()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Self::mode_color(self.mode))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(self.summary.to_string()),
        ];
        if let Some(message) = self.message {
            spans.push(Span::styled(format!("  | {}", message), palette.muted()));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.highlight_bg)),
            area,
        );
    }
}
