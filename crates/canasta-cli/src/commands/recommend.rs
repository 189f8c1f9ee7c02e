//! Recommend command: ranked complementary products for the selection.

use std::path::Path;

use canasta::{recommend_checked, CanastaError, Recommendation};
use colored::Colorize;

use crate::error::{CliError, Result};
use crate::loader::load_store;

const BAR_WIDTH: usize = 20;

/// Run the recommend command
pub(crate) fn run(path: &Path, items: &[String], top_n: usize) -> Result<()> {
    let store = load_store(path)?;

    let results = match recommend_checked(items, &store, top_n) {
        Ok(results) => results,
        Err(CanastaError::EmptyBasket) => return Err(CliError::EmptySelection),
        Err(e) => return Err(CliError::InvalidRules(e.to_string())),
    };

    if results.is_empty() {
        println!(
            "{}",
            "no strong recommendations found for this combination".yellow()
        );
        return Ok(());
    }

    println!("{}", "Recommended products".bold());
    for (rank, rec) in results.iter().enumerate() {
        print_entry(rank + 1, rec);
    }
    Ok(())
}

fn print_entry(rank: usize, rec: &Recommendation) {
    println!("{}. {}", rank, rec.item.cyan().bold());
    println!(
        "   confidence: {:.2}  lift: {:.2}",
        rec.confidence, rec.lift
    );
    println!("   {}", confidence_bar(rec.confidence));
}

/// Text progress bar proportional to min(confidence, 1.0).
fn confidence_bar(confidence: f64) -> String {
    let fraction = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bar_bounds() {
        assert_eq!(confidence_bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(confidence_bar(1.0), "█".repeat(BAR_WIDTH));
        // Values above 1.0 clamp to a full bar instead of panicking.
        assert_eq!(confidence_bar(3.7), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_confidence_bar_half() {
        let bar = confidence_bar(0.5);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_confidence_bar_nan() {
        assert_eq!(confidence_bar(f64::NAN), "░".repeat(BAR_WIDTH));
    }
}
