use anyhow::Result;
use certtrack::catalog::{QuestionCatalog, MODULE_COUNT};

fn main() -> Result<()> {
    let catalog = QuestionCatalog::load_embedded()?;
    println!("Question bank valid: {} questions.", catalog.len());
    for module_id in 1..=MODULE_COUNT {
        println!(
            "  module {}: {} questions",
            module_id,
            catalog.module_questions(module_id).len()
        );
    }
    Ok(())
}
