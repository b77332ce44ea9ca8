//! Bookshelf TUI
//!
//! Terminal browser for a static book catalog: search, tag filter,
//! persistent bookmarks and a details modal.

mod app;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use bookshelf_core::{BookshelfConfig, FileStore, KeyValueStore, MemoryStore, Session};

use app::App;

/// Browse, search and bookmark a book catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about)]
struct Args {
    /// JSON catalog file (overrides the config file)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory for bookmarks, theme and the log file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file (default: ~/.bookshelf/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep bookmarks and theme in memory only
    #[arg(long)]
    memory: bool,
}

impl Args {
    /// Merge command-line overrides into the file configuration
    fn apply(&self, mut config: BookshelfConfig) -> BookshelfConfig {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.storage.dir = Some(dir.clone());
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Setup logging
    let log_dir = config.storage_dir().unwrap_or_else(std::env::temp_dir);
    init_logging(&log_dir);

    let session = start_session(&args, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}

/// Read the config file and apply command-line overrides.
fn load_config(args: &Args) -> bookshelf_core::Result<BookshelfConfig> {
    let config = BookshelfConfig::load_standard(args.config.as_deref())?;
    Ok(args.apply(config))
}

/// Load the catalog and persisted state described by `config`.
///
/// Never fails: a catalog that cannot be loaded leaves the session empty,
/// and unreadable bookmarks or theme fall back to their defaults.
fn start_session(args: &Args, config: &BookshelfConfig) -> Session {
    let store = open_store(args.memory, config.storage_dir());
    Session::start(&config.catalog_source(), store)
}

/// Pick the storage backend: in-memory when asked or when no data
/// directory can be determined, otherwise files under `data_dir`.
fn open_store(memory: bool, data_dir: Option<PathBuf>) -> Arc<dyn KeyValueStore> {
    match data_dir {
        Some(dir) if !memory => {
            tracing::info!("Using state directory {:?}", dir);
            if let Err(e) = std::fs::create_dir_all(&dir) {
                tracing::warn!("State directory {:?} is not writable: {}", dir, e);
            }
            Arc::new(FileStore::new(dir))
        }
        _ => {
            tracing::info!("Using in-memory state");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Log to `<dir>/bookshelf.log` so output never lands on the alternate screen.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
fn init_logging(dir: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("bookshelf.log"));
    if let Ok(file) = file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Theme, BOOKMARKS_KEY, THEME_KEY};

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["bookshelf", "--catalog", "/tmp/books.json", "--memory"]);
        let mut config = BookshelfConfig::default();
        config.storage.dir = Some(PathBuf::from("/var/lib/bookshelf"));

        let merged = args.apply(config);
        assert_eq!(merged.catalog.path, Some(PathBuf::from("/tmp/books.json")));
        assert_eq!(merged.storage.dir, Some(PathBuf::from("/var/lib/bookshelf")));
        assert!(args.memory);
    }

    #[test]
    fn invalid_config_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog\npath = 3").unwrap();

        let args = Args::parse_from(["bookshelf", "--config", path.to_str().unwrap()]);
        assert!(matches!(
            load_config(&args),
            Err(bookshelf_core::BookshelfError::Config(_))
        ));
    }

    #[test]
    fn config_file_with_flag_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndir = \"/srv/bookshelf\"\n").unwrap();

        let args = Args::parse_from([
            "bookshelf",
            "--config",
            path.to_str().unwrap(),
            "--data-dir",
            "/tmp/shelf",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/shelf")));
    }

    #[test]
    fn starts_from_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("books.json");
        std::fs::write(
            &catalog,
            r#"[{"id":"x1","title":"Pro Git","author":"Scott Chacon","year":2014,"tags":["git"]}]"#,
        )
        .unwrap();

        let args = Args::parse_from(["bookshelf", "--memory"]);
        let mut config = BookshelfConfig::default();
        config.catalog.path = Some(catalog);

        let session = start_session(&args, &config);
        assert!(session.load_error().is_none());
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.record("x1").map(|r| r.icon), Some("🌳"));
    }

    #[test]
    fn unreadable_state_does_not_block_startup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BOOKMARKS_KEY), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::write(dir.path().join(THEME_KEY), [0xff, 0xfe, 0x00]).unwrap();

        let args = Args::parse_from(["bookshelf"]);
        let mut config = BookshelfConfig::default();
        config.storage.dir = Some(dir.path().to_path_buf());

        let mut session = start_session(&args, &config);
        assert_eq!(session.theme(), Theme::Light);
        assert!(session.bookmarks().is_empty());
        assert!(!session.catalog().is_empty());

        assert_eq!(session.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(std::fs::read_to_string(dir.path().join(THEME_KEY)).unwrap(), "dark");
    }

    #[test]
    fn file_store_when_directory_given() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(false, Some(dir.path().to_path_buf()));
        store.set("theme", "dark").unwrap();
        assert!(dir.path().join("theme").exists());
    }

    #[test]
    fn memory_store_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(true, Some(dir.path().to_path_buf()));
        store.set("theme", "dark").unwrap();
        assert!(!dir.path().join("theme").exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
