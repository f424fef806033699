//! Reference ratio tables
//!
//! Hardcoded population percentages for every condition category. The tables
//! are static data; [`RatioTables`] bundles them into the read-only lookup
//! object the estimator owns.

mod age;
mod education;
mod height;
mod income;
mod lifestyle;
mod population;
mod region;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::condition::{ConditionCategory, ConditionValue};

pub use age::{age_range_ratio, AgeBand, AGE_BANDS};
pub use education::EDUCATION_BUCKETS;
pub use height::HEIGHT_BUCKETS;
pub use income::{JOB_BUCKETS, SALARY_BUCKETS};
pub use lifestyle::{GENDER_BUCKETS, MARITAL_STATUS_BUCKETS, SMOKING_BUCKETS};
pub use population::{Population, NATION_POPULATION};
pub use region::LOCATION_BUCKETS;

// ============================================================================
// Buckets
// ============================================================================

/// One selectable value of a categorical condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioBucket {
    /// Code the caller submits (e.g. "160-165")
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
    /// Percentage of the reference population, in (0, 100]
    pub ratio: f64,
    /// Numeric extent `[lower, upper)` for tables that can be queried by span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(u32, u32)>,
}

// ============================================================================
// Tables
// ============================================================================

/// Immutable set of ratio tables
///
/// Built once and shared by reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct RatioTables {
    buckets: BTreeMap<ConditionCategory, &'static [RatioBucket]>,
    age_bands: &'static [AgeBand],
    population: Population,
}

impl RatioTables {
    /// The built-in reference tables
    pub fn standard() -> Self {
        let buckets = BTreeMap::from([
            (ConditionCategory::Gender, GENDER_BUCKETS),
            (ConditionCategory::Height, HEIGHT_BUCKETS),
            (ConditionCategory::Education, EDUCATION_BUCKETS),
            (ConditionCategory::Salary, SALARY_BUCKETS),
            (ConditionCategory::Job, JOB_BUCKETS),
            (ConditionCategory::Location, LOCATION_BUCKETS),
            (ConditionCategory::MaritalStatus, MARITAL_STATUS_BUCKETS),
            (ConditionCategory::Smoking, SMOKING_BUCKETS),
        ]);

        RatioTables {
            buckets,
            age_bands: AGE_BANDS,
            population: NATION_POPULATION,
        }
    }

    /// Percentage for a (category, value) pair, or `None` when the value is
    /// not recognized for that category
    pub fn lookup(&self, category: ConditionCategory, value: &ConditionValue) -> Option<f64> {
        match (category, value) {
            (ConditionCategory::AgeRange, ConditionValue::Range(range)) => {
                Some(age_range_ratio(self.age_bands, range))
            }
            (ConditionCategory::AgeRange, _) => None,
            (_, ConditionValue::Range(_)) => None,
            (_, ConditionValue::Code(code)) => self
                .bucket(category, code)
                .map(|bucket| bucket.ratio),
            (_, ConditionValue::Codes(codes)) => {
                capped_sum(codes.iter().filter_map(|code| self.bucket(category, code)))
            }
            (_, ConditionValue::Span(span)) => capped_sum(
                self.buckets(category)
                    .iter()
                    .filter(|b| matches!(b.bounds, Some((lo, hi)) if span.overlaps(lo, hi))),
            ),
        }
    }

    /// Find a bucket by code
    pub fn bucket(&self, category: ConditionCategory, code: &str) -> Option<&'static RatioBucket> {
        self.buckets(category).iter().find(|b| b.code == code)
    }

    /// All buckets of a categorical table (empty for `age_range`)
    pub fn buckets(&self, category: ConditionCategory) -> &'static [RatioBucket] {
        self.buckets.get(&category).copied().unwrap_or(&[])
    }

    pub fn age_bands(&self) -> &'static [AgeBand] {
        self.age_bands
    }

    pub fn population(&self) -> Population {
        self.population
    }

    /// Per-category overview of the loaded tables
    pub fn summary(&self) -> TablesSummary {
        let categories = ConditionCategory::ALL
            .into_iter()
            .map(|category| {
                let (buckets, coverage) = match category {
                    ConditionCategory::AgeRange => (
                        self.age_bands.len(),
                        self.age_bands.iter().map(|b| b.share).sum(),
                    ),
                    _ => {
                        let table = self.buckets(category);
                        (table.len(), table.iter().map(|b| b.ratio).sum())
                    }
                };
                CategorySummary {
                    category,
                    buckets,
                    coverage,
                }
            })
            .collect();

        TablesSummary {
            total_categories: ConditionCategory::ALL.len(),
            categories,
            population: self.population,
            calculation_method: "independent product",
        }
    }
}

/// Combined share of the matched buckets, capped at 100
///
/// `None` when nothing matched, so the whole value counts as unrecognized.
fn capped_sum<'a>(buckets: impl Iterator<Item = &'a RatioBucket>) -> Option<f64> {
    let mut matched = false;
    let mut total = 0.0_f64;
    for bucket in buckets {
        matched = true;
        total += bucket.ratio;
    }
    matched.then(|| total.min(100.0))
}

impl Default for RatioTables {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Overview of one category's table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: ConditionCategory,
    /// Number of buckets (age bands for `age_range`)
    pub buckets: usize,
    /// Sum of the table's percentages
    pub coverage: f64,
}

/// Overview of all loaded tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablesSummary {
    pub total_categories: usize,
    pub categories: Vec<CategorySummary>,
    pub population: Population,
    pub calculation_method: &'static str,
}
