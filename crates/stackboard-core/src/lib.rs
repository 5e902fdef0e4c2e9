//! Function-stack diagrams for the 16 personality types.
//!
//! Data flows one way: the function taxonomy feeds the stack generator, a
//! stack plus a board's coin state feeds the layout engine, and the layout
//! engine emits per-slot descriptors for a renderer.

pub mod board;
pub mod config;
pub mod error;
pub mod function;
pub mod skin;
pub mod stack;
pub mod wizard;

// Re-export common error type
pub use error::{Result, StackboardError};
