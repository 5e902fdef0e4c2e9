use anyhow::{Context, Result};
use stackboard_core::config::LayoutConfigRepository;
use std::path::PathBuf;

use super::utils::open_repository;

pub fn init(path: Option<PathBuf>) -> Result<()> {
    let repo = open_repository(path)?;
    if repo.init()? {
        eprintln!("Wrote default config to {}", repo.path().display());
    } else {
        eprintln!("Config already exists at {}", repo.path().display());
    }
    Ok(())
}

pub fn show(path: Option<PathBuf>) -> Result<()> {
    let repo = open_repository(path)?;
    let config = repo
        .load()
        .with_context(|| format!("Failed to load {}", repo.path().display()))?;
    let toml_string = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{toml_string}");
    Ok(())
}

pub fn path(path: Option<PathBuf>) -> Result<()> {
    let repo = open_repository(path)?;
    println!("{}", repo.path().display());
    Ok(())
}
