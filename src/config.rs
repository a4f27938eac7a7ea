use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_DATABASE_PATH, DEFAULT_DIRECT_URL_FEED, DEFAULT_LOG_DIR,
    DEFAULT_PROVIDER_LIST_FEED,
};
use crate::error::{IngestError, Result};
use crate::normalize::FeedShape;
use crate::pipeline::FeedSource;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub feeds: FeedPaths,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedPaths {
    pub provider_list: PathBuf,
    pub direct_url: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            feeds: FeedPaths::default(),
        }
    }
}

impl Default for FeedPaths {
    fn default() -> Self {
        Self {
            provider_list: PathBuf::from(DEFAULT_PROVIDER_LIST_FEED),
            direct_url: PathBuf::from(DEFAULT_DIRECT_URL_FEED),
        }
    }
}

impl IngestConfig {
    /// Loads configuration from `path`, which must exist when given.
    /// Without a path, `config.toml` is read if present, else defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            IngestError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: IngestConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Feeds in ingestion order: the provider-list feed first, then direct-url.
    pub fn feed_sources(&self) -> Vec<FeedSource> {
        vec![
            FeedSource::new(&self.feeds.provider_list, FeedShape::ProviderList),
            FeedSource::new(&self.feeds.direct_url, FeedShape::DirectUrl),
        ]
    }
}
