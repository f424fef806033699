//! # idealtype
//!
//! Ideal-type rarity estimator - how many people match a set of partner
//! preferences.
//!
//! This library provides:
//! - Reference population ratio tables for each preference category
//! - Resolution of a condition set into per-condition ratios
//! - Composition of those ratios into one probability (independence assumed)
//! - Classification of the probability into a rarity tier
//!
//! ## Example
//!
//! ```
//! use idealtype::{ConditionCategory, ConditionSet, Estimator, RarityLevel, RatioTables};
//!
//! let estimator = Estimator::new(RatioTables::standard());
//! let conditions = ConditionSet::new()
//!     .with(ConditionCategory::Height, "160-165")
//!     .with(ConditionCategory::Education, "4년제");
//!
//! let result = estimator.estimate(&conditions);
//! assert_eq!(result.probability, 11.69);
//! assert_eq!(result.rarity_level, RarityLevel::VeryCommon);
//! ```

pub mod compose;
pub mod condition;
pub mod estimate;
pub mod rarity;
pub mod reference;
pub mod resolver;

// Re-export commonly used items
#[doc(inline)]
pub use compose::{compose, explain, round_percent, ExplanationStep};
#[doc(inline)]
pub use condition::{
    AgeRange, ConditionCategory, ConditionError, ConditionSet, ConditionValue, Span,
};
#[doc(inline)]
pub use estimate::{assemble, Estimator, MatchResult};
#[doc(inline)]
pub use rarity::{classify, RarityLevel, RarityTier, RARITY_TIERS};
#[doc(inline)]
pub use reference::{Population, RatioBucket, RatioTables, TablesSummary};
#[doc(inline)]
pub use resolver::{resolve, ConditionRatios, UnknownValuePolicy};
