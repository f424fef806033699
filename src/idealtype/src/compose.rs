//! Probability composition
//!
//! Conditions are treated as independent: the chance that one person meets
//! all of them is the product of the individual percentages.

use serde::Serialize;

use crate::condition::ConditionCategory;
use crate::resolver::ConditionRatios;

/// Probability with no conditions applied
pub const CERTAIN: f64 = 100.0;

/// Round a percentage to 2 decimal places, halves away from zero
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unrounded joint percentage, multiplied in category-key order
fn product(ratios: &ConditionRatios) -> f64 {
    ratios
        .sorted_by_key()
        .into_iter()
        .fold(CERTAIN, |acc, (_, ratio)| acc * (ratio / 100.0))
}

/// Aggregate probability (percent) of meeting every resolved condition
///
/// An empty map means no constraint and yields exactly 100. Any 0% ratio
/// collapses the result to 0.
pub fn compose(ratios: &ConditionRatios) -> f64 {
    if ratios.is_empty() {
        return CERTAIN;
    }
    round_percent(product(ratios).clamp(0.0, CERTAIN))
}

/// One narrowing step of the population funnel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationStep {
    pub category: ConditionCategory,
    /// Ratio applied at this step
    pub applied_ratio: f64,
    pub from_percent: f64,
    pub to_percent: f64,
    pub from_count: u64,
    pub to_count: u64,
}

/// Walk the ratios in caller order, showing how percentage and head-count
/// shrink as each condition is applied to `base_population`
pub fn explain(ratios: &ConditionRatios, base_population: u64) -> Vec<ExplanationStep> {
    let mut steps = Vec::with_capacity(ratios.len());
    let mut percent = CERTAIN;
    let mut count = base_population as f64;

    for (category, ratio) in ratios.iter() {
        let fraction = ratio / 100.0;
        let next_percent = percent * fraction;
        let next_count = count * fraction;

        steps.push(ExplanationStep {
            category,
            applied_ratio: round_percent(ratio),
            from_percent: round_percent(percent),
            to_percent: round_percent(next_percent),
            from_count: count.round() as u64,
            to_count: next_count.round() as u64,
        });

        percent = next_percent;
        count = next_count;
    }

    steps
}
