//! Rarity estimation
//!
//! Wires the resolver, composer and classifier together and packages the
//! outcome into a [`MatchResult`].

use serde::Serialize;
use tracing::debug;

use crate::compose::{self, ExplanationStep};
use crate::condition::{ConditionCategory, ConditionSet, ConditionValue};
use crate::rarity::{self, RarityLevel};
use crate::reference::RatioTables;
use crate::resolver::{self, ConditionRatios, UnknownValuePolicy};

/// Outcome of one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Aggregate probability in percent, rounded to 2 decimals
    pub probability: f64,
    pub rarity_level: RarityLevel,
    /// Per-category ratios, in the order the caller supplied them
    pub condition_ratios: ConditionRatios,
    /// Number of categories that were set
    pub total_conditions: usize,
}

/// Package an already-composed probability, its tier and its ratios
pub fn assemble(
    probability: f64,
    rarity_level: RarityLevel,
    condition_ratios: ConditionRatios,
    total_conditions: usize,
) -> MatchResult {
    MatchResult {
        probability,
        rarity_level,
        condition_ratios,
        total_conditions,
    }
}

/// Stateless estimator over a fixed set of ratio tables
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    tables: RatioTables,
    policy: UnknownValuePolicy,
}

impl Estimator {
    pub fn new(tables: RatioTables) -> Self {
        Estimator {
            tables,
            policy: UnknownValuePolicy::default(),
        }
    }

    /// Change how unrecognized values are treated
    pub fn with_policy(mut self, policy: UnknownValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tables(&self) -> &RatioTables {
        &self.tables
    }

    pub fn policy(&self) -> UnknownValuePolicy {
        self.policy
    }

    /// Estimate how rare a set of conditions is
    pub fn estimate(&self, conditions: &ConditionSet) -> MatchResult {
        let ratios = resolver::resolve(&self.tables, conditions, self.policy);
        let probability = compose::compose(&ratios);
        let rarity_level = rarity::classify(probability);
        let result = assemble(probability, rarity_level, ratios, conditions.len());

        debug!(
            probability = result.probability,
            rarity = %result.rarity_level,
            conditions = result.total_conditions,
            "estimated"
        );
        result
    }

    /// Head-count the percentages are taken of
    ///
    /// A recognized gender narrows the pool to that gender's population;
    /// otherwise it is the nation total.
    pub fn base_population(&self, conditions: &ConditionSet) -> u64 {
        let population = self.tables.population();
        match conditions.get(ConditionCategory::Gender) {
            Some(ConditionValue::Code(gender)) => population
                .of_gender(gender)
                .unwrap_or(population.total),
            _ => population.total,
        }
    }

    /// Step-by-step narrowing of the base population
    ///
    /// Gender chooses the base rather than narrowing it, so it gets no step.
    pub fn explain(&self, conditions: &ConditionSet) -> Vec<ExplanationStep> {
        let ratios: ConditionRatios = resolver::resolve(&self.tables, conditions, self.policy)
            .iter()
            .filter(|(category, _)| *category != ConditionCategory::Gender)
            .collect();
        compose::explain(&ratios, self.base_population(conditions))
    }

    /// Approximate number of people in the base population matching a result
    pub fn estimated_population(&self, conditions: &ConditionSet, result: &MatchResult) -> u64 {
        let base = self.base_population(conditions) as f64;
        (base * result.probability / 100.0).round() as u64
    }
}
