//! Config file storage with atomic writes.
//!
//! Reads and writes a single TOML document. Writes go to a temporary file in
//! the same directory followed by a rename, and every write holds an
//! exclusive lock file so `create_if_missing` cannot race another writer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use thiserror::Error;

use stackboard_core::StackboardError;

/// Errors that can occur during config storage operations.
#[derive(Debug, Error)]
pub enum ConfigStorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<ConfigStorageError> for StackboardError {
    fn from(err: ConfigStorageError) -> Self {
        match err {
            ConfigStorageError::Io(e) => e.into(),
            ConfigStorageError::TomlParse(e) => e.into(),
            ConfigStorageError::TomlSer(e) => e.into(),
            ConfigStorageError::Lock(message) => StackboardError::io(message),
        }
    }
}

pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// - `Ok(Some(T))`: loaded
    /// - `Ok(None)`: file missing or blank
    /// - `Err`: unreadable or not valid TOML for `T`
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, ConfigStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    /// Serializes and writes the file atomically.
    pub fn save<T: Serialize>(&self, data: &T) -> Result<(), ConfigStorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        self.write_atomic(data)
    }

    /// Writes `data` only if no file exists yet. The existence check and the
    /// write happen under the same lock.
    ///
    /// Returns whether the file was written.
    pub fn create_if_missing<T: Serialize>(&self, data: &T) -> Result<bool, ConfigStorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        if self.path.exists() {
            return Ok(false);
        }
        self.write_atomic(data)?;
        Ok(true)
    }

    fn write_atomic<T: Serialize>(&self, data: &T) -> Result<(), ConfigStorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, ConfigStorageError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            ConfigStorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, ConfigStorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| ConfigStorageError::Lock(format!("{}: {}", lock_path.display(), e)))?;

        Ok(Self { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}
