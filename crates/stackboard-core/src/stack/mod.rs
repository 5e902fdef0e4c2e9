//! Stack generation.
//!
//! # Module Structure
//!
//! - `table`: the 16 base types and their ordered functions
//! - `model`: slots, variants and the instantiated `Stack`
//! - `profile`: the 32 (type, variant) profile identifiers

mod model;
mod profile;
mod table;

pub use model::{Slot, Stack, StackFunction, Variant};
pub use profile::ProfileId;
pub use table::PersonalityType;

use crate::error::Result;

/// Generates the stack for a 4-letter type code.
///
/// The code is matched case-insensitively. Unknown codes fail with
/// `StackboardError::UnknownType`; no partial stack is ever returned.
pub fn generate_stack(type_code: &str, variant: Variant) -> Result<Stack> {
    let personality_type = PersonalityType::parse(type_code)?;
    tracing::debug!(%personality_type, %variant, "generating stack");
    Ok(Stack::for_type(personality_type, variant))
}
