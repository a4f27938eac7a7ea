use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read feed '{}': {source}", .path.display())]
    FeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feed '{}': {source}", .path.display())]
    FeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to initialize jobs table: {0}")]
    StoreInit(#[source] rusqlite::Error),

    #[error("Invalid value in column {column}: {value}")]
    InvalidColumn { column: &'static str, value: String },
}

impl IngestError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::Io(_) => "io",
            IngestError::Toml(_) => "toml",
            IngestError::Database(_) => "database",
            IngestError::Config(_) => "config",
            IngestError::FeedRead { .. } => "feed_read",
            IngestError::FeedParse { .. } => "feed_parse",
            IngestError::StoreInit(_) => "store_init",
            IngestError::InvalidColumn { .. } => "invalid_column",
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
