//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use bookshelf_core::{RecordId, Session};

use crate::keybindings::{normal_mode_action, Action, KEY_HINTS};
use crate::mode::Mode;
use crate::views::{centered_rect, BookmarksView, CatalogView, DetailView};
use crate::widgets::{Header, Palette, SearchBar, StatusBar};

/// Which list has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Catalog,
    Bookmarks,
}

/// Main application state
pub struct App {
    /// Catalog, bookmarks, theme and query
    pub session: Session,
    /// Current mode (NORMAL, SEARCH, DETAIL)
    pub mode: Mode,
    /// Focused panel
    pub panel: Panel,
    /// Book shown in the details modal
    pub detail: Option<RecordId>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    pub catalog_view: CatalogView,
    pub bookmarks_view: BookmarksView,
}

impl App {
    /// Create a new application instance around a started session
    pub fn new(session: Session) -> Self {
        let status_message = session
            .load_error()
            .map(|_| "Error loading books".to_string());
        Self {
            session,
            mode: Mode::Normal,
            panel: Panel::Catalog,
            detail: None,
            show_help: false,
            status_message,
            catalog_view: CatalogView::new(),
            bookmarks_view: BookmarksView::new(),
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let palette = Palette::for_theme(self.session.theme());
        let view = self.session.view();

        frame.render_widget(Block::default().style(palette.base()), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Search + tag filter
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Stats
                Constraint::Length(1), // Key hints
            ])
            .split(size);

        Header::new(&view.total_label, view.theme).render(frame, chunks[0], &palette);
        SearchBar::new(view.term, view.tag_filter, view.tags.len(), self.mode == Mode::Search)
            .render(frame, chunks[1], &palette);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[2]);

        self.catalog_view.render(
            frame,
            content[0],
            &view,
            self.panel == Panel::Catalog,
            &palette,
        );
        let bookmarked = self.session.bookmarked_records();
        self.bookmarks_view.render(
            frame,
            content[1],
            &bookmarked,
            self.panel == Panel::Bookmarks,
            &palette,
        );

        StatusBar::new(self.mode, &view.summary, self.status_message.as_deref())
            .render(frame, chunks[3], &palette);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(palette.muted().bg(palette.bg)),
            chunks[4],
        );

        if self.mode == Mode::Detail {
            if let Some(record) = self.detail.as_deref().and_then(|id| self.session.record(id)) {
                DetailView::render(
                    frame,
                    size,
                    record,
                    self.session.is_bookmarked(&record.id),
                    &palette,
                );
            }
        }

        if self.show_help {
            self.render_help_overlay(frame, size, &palette);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let help_text = r#"
Bookshelf - Help

Search & filter:
  /       - Type a search term (title, author or tag)
  Enter   - Finish typing
  Esc     - Finish typing / clear the search term
  t / T   - Next / previous tag filter

Browsing:
  j/k     - Move down/up
  Tab     - Switch between books and bookmarks
  Enter   - Show details
  b       - Bookmark / remove bookmark

Other:
  d       - Toggle light/dark theme
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .style(Style::default().bg(palette.bg));

        let help_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, help_area);
        let paragraph = Paragraph::new(help_text).style(palette.base()).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.show_help {
            self.show_help = false;
            return false;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, modifiers),
            Mode::Search => self.handle_search_key(code, modifiers),
            Mode::Detail => self.handle_detail_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterSearch => {
                self.mode = Mode::Search;
                self.status_message = None;
            }
            Action::Cancel => {
                if !self.session.query().term().is_empty() {
                    self.session.clear_term();
                    self.clamp_selection();
                    self.status_message = Some("Search cleared".to_string());
                }
            }
            Action::ToggleHelp => self.show_help = true,
            Action::MoveDown => match self.panel {
                Panel::Catalog => self.catalog_view.next(self.session.match_count()),
                Panel::Bookmarks => self.bookmarks_view.next(self.bookmark_count()),
            },
            Action::MoveUp => match self.panel {
                Panel::Catalog => self.catalog_view.prev(self.session.match_count()),
                Panel::Bookmarks => self.bookmarks_view.prev(self.bookmark_count()),
            },
            Action::SwitchPanel => {
                self.panel = match self.panel {
                    Panel::Catalog => Panel::Bookmarks,
                    Panel::Bookmarks => Panel::Catalog,
                };
            }
            Action::NextTag | Action::PrevTag => {
                self.session.cycle_tag_filter(action == Action::NextTag);
                self.catalog_view.selected = 0;
                self.status_message = Some(format!("Tag: {}", self.session.query().tag_filter()));
            }
            Action::ToggleBookmark => {
                if let Some(id) = self.selected_id() {
                    self.toggle_bookmark(&id);
                }
            }
            Action::ToggleTheme => match self.session.toggle_theme() {
                Ok(theme) => self.status_message = Some(format!("Theme: {}", theme)),
                Err(e) => {
                    tracing::error!("Failed to save theme: {}", e);
                    self.status_message = Some(format!("Could not save theme: {}", e));
                }
            },
            Action::Select => {
                if let Some(id) = self.selected_id() {
                    self.detail = Some(id);
                    self.mode = Mode::Detail;
                }
            }
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                let mut term = self.session.query().term().to_string();
                term.pop();
                self.set_term(&term);
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_term("");
            }
            KeyCode::Char(c) => {
                let mut term = self.session.query().term().to_string();
                term.push(c);
                self.set_term(&term);
            }
            _ => {}
        }
        false
    }

    fn handle_detail_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.mode = Mode::Normal;
                self.detail = None;
            }
            KeyCode::Char('b') => {
                if let Some(id) = self.detail.clone() {
                    self.toggle_bookmark(&id);
                }
            }
            _ => {}
        }
        false
    }

    fn set_term(&mut self, term: &str) {
        self.session.set_term(term);
        self.catalog_view.selected = 0;
        self.clamp_selection();
    }

    fn toggle_bookmark(&mut self, id: &str) {
        let title = self
            .session
            .record(id)
            .map(|r| r.title.clone())
            .unwrap_or_else(|| id.to_string());
        match self.session.toggle_bookmark(id) {
            Ok(true) => self.status_message = Some(format!("Bookmarked \"{}\"", title)),
            Ok(false) => self.status_message = Some(format!("Removed bookmark \"{}\"", title)),
            Err(e) => {
                tracing::error!("Failed to save bookmark {}: {}", id, e);
                self.status_message = Some(format!("Could not save bookmark: {}", e));
            }
        }
        self.clamp_selection();
    }

    /// Id of the book under the cursor in the focused panel
    pub fn selected_id(&self) -> Option<RecordId> {
        match self.panel {
            Panel::Catalog => self
                .session
                .matches()
                .nth(self.catalog_view.selected)
                .map(|r| r.id.clone()),
            Panel::Bookmarks => self
                .session
                .bookmarked_records()
                .get(self.bookmarks_view.selected)
                .map(|r| r.id.clone()),
        }
    }

    fn bookmark_count(&self) -> usize {
        self.session.bookmarked_records().len()
    }

    fn clamp_selection(&mut self) {
        self.catalog_view.clamp(self.session.match_count());
        self.bookmarks_view.clamp(self.bookmark_count());
    }
}
