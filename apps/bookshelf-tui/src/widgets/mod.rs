//! TUI widgets

mod header;
mod palette;
mod search_bar;
mod status_bar;

pub use header::Header;
pub use palette::Palette;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
