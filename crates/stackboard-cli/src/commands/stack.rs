use anyhow::{Context, Result};
use stackboard_core::stack::{Variant, generate_stack};

use super::utils::print_json;

pub fn run(code: &str, variant: &str) -> Result<()> {
    let variant: Variant = variant.parse()?;
    let stack = generate_stack(code, variant)
        .with_context(|| format!("Cannot build a stack for '{code}'"))?;
    print_json(&stack)
}
