//! Error types for bookshelf-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for bookshelf operations
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Main error type for bookshelf operations
#[derive(Error, Debug)]
pub enum BookshelfError {
    /// Catalog could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Key-value storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// The catalog resource could not be read
    #[error("Cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog resource is not a valid record list
    #[error("Cannot decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

/// Key-value storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters that cannot name a storage slot
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for writing
    #[error("Cannot encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// A persisted value exists but cannot be decoded
    #[error("Corrupt value under {key:?}: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
