//! Rarity tier listing

use anyhow::Result;
use idealtype::RARITY_TIERS;

/// Handle the rarity command
pub fn handle() -> Result<()> {
    println!("{:<12} {:<16} {:>12}", "Tier", "Name", "Probability");
    println!("{}", "-".repeat(42));
    for tier in RARITY_TIERS {
        let threshold = if tier.min_probability.is_finite() {
            format!(">= {}%", tier.min_probability)
        } else {
            "below".to_string()
        };
        println!("{:<12} {:<16} {:>12}", tier.label, tier.name, threshold);
    }
    Ok(())
}
