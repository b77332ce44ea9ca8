//! bookshelf-core: catalog loading, tag filtering, and persisted bookmarks.
//!
//! A catalog is a static JSON list of books. It is loaded once into a
//! read-only [`CatalogIndex`], searched by free text and tag through the
//! pure [`query`] function, and paired with a persisted [`BookmarkStore`].
//! [`Session`] owns all of it for a single run and hands render-ready
//! snapshots to whatever draws the screen.

pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod query;
pub mod record;
pub mod session;
pub mod stats;
pub mod storage;
pub mod theme;

pub use bookmarks::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use loader::*;
pub use query::*;
pub use record::*;
pub use session::*;
pub use stats::*;
pub use storage::*;
pub use theme::*;
