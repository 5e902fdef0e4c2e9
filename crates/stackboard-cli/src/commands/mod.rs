pub mod config;
pub mod layout;
pub mod stack;
pub mod types;
pub mod utils;
