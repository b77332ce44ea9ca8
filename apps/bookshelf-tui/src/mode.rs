//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the card list (default)
    #[default]
    Normal,
    /// Typing into the search box (activated with /)
    Search,
    /// Details modal for one book (activated with Enter)
    Detail,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Search => write!(f, "SEARCH"),
            Mode::Detail => write!(f, "DETAIL"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Search => "SRC",
            Mode::Detail => "DET",
        }
    }
}
