//! Path management for stackboard configuration files.
//!
//! ```text
//! ~/.config/stackboard/        # Config directory (platform default)
//! └── board.toml               # Layout configuration overrides
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Config directory could not be determined.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

pub struct StackboardPaths;

impl StackboardPaths {
    const APP_DIR: &'static str = "stackboard";
    const CONFIG_FILE: &'static str = "board.toml";

    /// Returns the stackboard configuration directory.
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/stackboard/` on Linux
    /// - `Err(PathError::ConfigDirNotFound)`: no platform config directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of the layout configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
