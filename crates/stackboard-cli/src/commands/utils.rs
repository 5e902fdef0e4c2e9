use anyhow::{Context, Result};
use serde::Serialize;
use stackboard_infrastructure::TomlLayoutConfigRepository;
use std::path::PathBuf;

/// Opens the config repository at `path`, or at the platform default.
pub fn open_repository(path: Option<PathBuf>) -> Result<TomlLayoutConfigRepository> {
    match path {
        Some(path) => Ok(TomlLayoutConfigRepository::with_path(path)),
        None => TomlLayoutConfigRepository::new().context("Failed to resolve config path"),
    }
}

/// Writes a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
