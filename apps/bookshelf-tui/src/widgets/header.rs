//! Title bar with the catalog counter and theme indicator.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use bookshelf_core::Theme;

use super::Palette;

pub struct Header<'a> {
    total_label: &'a str,
    theme: Theme,
}

impl<'a> Header<'a> {
    pub fn new(total_label: &'a str, theme: Theme) -> Self {
        Self { total_label, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let theme_icon = match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        };
        let line = Line::from(vec![
            Span::styled(
                " Bookshelf ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("| {} ", self.total_label), palette.muted()),
            Span::styled(format!("| {} {} ", theme_icon, self.theme), palette.muted()),
        ]);
        frame.render_widget(Paragraph::new(line).style(palette.base()), area);
    }
}
