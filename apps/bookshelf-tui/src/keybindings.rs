//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Focus the search box
    EnterSearch,
    /// Clear the search term / close overlays
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Switch between the catalog and bookmarks panels
    SwitchPanel,
    /// Next tag filter
    NextTag,
    /// Previous tag filter
    PrevTag,
    /// Bookmark or unbookmark the selected book
    ToggleBookmark,
    /// Switch light/dark theme
    ToggleTheme,
    /// Toggle help
    ToggleHelp,
    /// Open details for the selected book
    Select,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('t') => Some(Action::NextTag),
        KeyCode::Char('T') => Some(Action::PrevTag),
        KeyCode::Char('b') => Some(Action::ToggleBookmark),
        KeyCode::Char('d') => Some(Action::ToggleTheme),
        KeyCode::Tab => Some(Action::SwitchPanel),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// One-line key hints for the footer
pub const KEY_HINTS: &str =
    "/ search  t/T tag  j/k move  b bookmark  Enter details  Tab panel  d theme  ? help  q quit";
