//! One-shot scripted demonstration of the HRR engine.
//!
//! Builds the canonical Apple example: three attribute/value facts are
//! bound, superposed into a single composite, and queried back by the
//! `Color` key. The recovered vector is noisy; the cleanup scan against
//! the knowledge base resolves it to a concrete concept.

use crate::error::Result;
use crate::memory::KnowledgeBase;

/// Runs the fixed demo scenario and prints the results.
pub fn run(dimension: usize, seed: Option<u64>) -> Result<()> {
    println!("engram demo: a single vector holding three facts");
    println!();

    let mut kb = KnowledgeBase::new(dimension, seed)?;

    println!("[1] creating base concepts (dimension {})", dimension);
    for name in ["Color", "Shape", "Taste", "Red", "Round", "Sweet", "Apple_ID"] {
        kb.define(name)?;
    }
    println!("    defined: {}", kb.names().join(", "));

    println!("[2] binding facts and superposing them into 'Apple'");
    kb.combine("ColorRed", "Color", "Red")?;
    kb.combine("ShapeRound", "Shape", "Round")?;
    kb.combine("TasteSweet", "Taste", "Sweet")?;
    kb.superpose("Apple", &["ColorRed", "ShapeRound", "TasteSweet"])?;
    println!("    Apple = Color*Red + Shape*Round + Taste*Sweet");

    println!("[3] query: what is the Color of the Apple?");
    let outcome = kb.query("Apple", "Color")?;
    for candidate in &outcome.ranked {
        println!("    similarity to '{}': {:.4}", candidate.name, candidate.score);
    }

    if let Some(best) = outcome.best() {
        println!();
        println!("result: the Color of the Apple is {}", best.name.to_uppercase());
    }

    Ok(())
}
