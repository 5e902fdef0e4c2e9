use anyhow::Result;
use stackboard_core::stack::PersonalityType;

pub fn run() -> Result<()> {
    for ty in PersonalityType::all() {
        let functions = ty.functions().map(|f| f.to_string()).join(" ");
        println!("{ty}  {functions}");
    }
    Ok(())
}
