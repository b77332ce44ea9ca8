//! Configuration for bookshelf
//!
//! Read from `~/.bookshelf/config.toml` when present. Every field is
//! optional; an absent file means the bundled catalog and the default
//! storage directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::CatalogSource;
use crate::storage::FileStore;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// Where the catalog is read from
    pub catalog: CatalogConfig,
    /// Where bookmarks and the theme are kept
    pub storage: StorageConfig,
}

/// Catalog settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file; the bundled sample is used when unset
    pub path: Option<PathBuf>,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// State directory; `<data_dir>/bookshelf` when unset
    pub dir: Option<PathBuf>,
}

impl BookshelfConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`~/.bookshelf/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bookshelf").join("config.toml"))
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else defaults.
    pub fn load_standard(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The catalog source this configuration names.
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog.path {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Bundled,
        }
    }

    /// The storage directory, if one can be determined.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage.dir.clone().or_else(FileStore::default_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = BookshelfConfig::from_toml("").unwrap();
        assert_eq!(config, BookshelfConfig::default());
        assert_eq!(config.catalog_source(), CatalogSource::Bundled);
    }

    #[test]
    fn parses_paths() {
        let config = BookshelfConfig::from_toml(
            r#"
[catalog]
path = "/srv/books.json"

[storage]
dir = "/var/lib/bookshelf"
"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog_source(),
            CatalogSource::File(PathBuf::from("/srv/books.json"))
        );
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/var/lib/bookshelf")));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = BookshelfConfig::new();
        config.catalog.path = Some(PathBuf::from("books.json"));
        let parsed = BookshelfConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(matches!(
            BookshelfConfig::from_toml("[catalog\npath = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let result = BookshelfConfig::load_standard(Some(Path::new("/nonexistent/bookshelf.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
