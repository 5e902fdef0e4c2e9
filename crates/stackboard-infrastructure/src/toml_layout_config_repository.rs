//! TOML-based LayoutConfigRepository implementation

use std::path::{Path, PathBuf};

use crate::paths::StackboardPaths;
use crate::storage::ConfigStorage;
use stackboard_core::config::{LayoutConfig, LayoutConfigRepository};
use stackboard_core::{Result, StackboardError};

/// Stores layout overrides in `board.toml`.
///
/// Responsibilities:
/// - Load/save `LayoutConfig` through `ConfigStorage`
/// - Reject files that parse but fail `LayoutConfig::validate`
///
/// Does NOT:
/// - Handle atomic writes or locking (delegated to ConfigStorage)
pub struct TomlLayoutConfigRepository {
    storage: ConfigStorage,
}

impl TomlLayoutConfigRepository {
    /// Creates a repository at the default path (`~/.config/stackboard/board.toml`)
    pub fn new() -> Result<Self> {
        let config_path =
            StackboardPaths::config_file().map_err(|e| StackboardError::config(e.to_string()))?;
        Ok(Self::with_path(config_path))
    }

    /// Creates a repository with a custom config path
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            storage: ConfigStorage::new(config_path),
        }
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Writes the default configuration unless a file already exists.
    ///
    /// Returns whether a file was written.
    pub fn init(&self) -> Result<bool> {
        let written = self.storage.create_if_missing(&LayoutConfig::default())?;
        if written {
            tracing::debug!(path = %self.path().display(), "wrote default layout config");
        } else {
            tracing::debug!(path = %self.path().display(), "config file already present");
        }
        Ok(written)
    }
}

impl LayoutConfigRepository for TomlLayoutConfigRepository {
    fn load(&self) -> Result<LayoutConfig> {
        let config = match self.storage.load::<LayoutConfig>()? {
            Some(config) => config,
            None => {
                tracing::debug!(path = %self.path().display(), "no config file, using defaults");
                return Ok(LayoutConfig::default());
            }
        };

        if let Err(err) = config.validate() {
            tracing::warn!(path = %self.path().display(), error = %err, "rejecting config file");
            return Err(err);
        }

        tracing::debug!(path = %self.path().display(), "loaded layout config");
        Ok(config)
    }

    fn save(&self, config: &LayoutConfig) -> Result<()> {
        config.validate()?;
        self.storage.save(config)?;
        tracing::debug!(path = %self.path().display(), "saved layout config");
        Ok(())
    }
}
