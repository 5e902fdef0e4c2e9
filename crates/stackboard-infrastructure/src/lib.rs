pub mod paths;
pub mod storage;
pub mod toml_layout_config_repository;

pub use crate::paths::StackboardPaths;
pub use crate::toml_layout_config_repository::TomlLayoutConfigRepository;
