//! Cognitive function taxonomy.
//!
//! # Module Structure
//!
//! - `model`: the eight functions, their letter, attitude and kind, and the
//!   opposite-function involution

mod model;

pub use model::{
    attitude, kind, opposite, Attitude, CognitiveFunction, FunctionKind, FunctionLetter,
};
