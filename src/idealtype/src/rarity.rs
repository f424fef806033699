//! Rarity tier definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// How unusual a combination of conditions is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RarityLevel {
    #[serde(rename = "매우 흔함")]
    VeryCommon,
    #[serde(rename = "흔함")]
    Common,
    #[serde(rename = "보통")]
    Average,
    #[serde(rename = "희귀")]
    Rare,
    #[serde(rename = "매우 희귀")]
    VeryRare,
    #[serde(rename = "극히 희귀")]
    ExtremelyRare,
}

impl RarityLevel {
    /// Korean label, also the serialized form
    pub fn label(self) -> &'static str {
        tier(self).label
    }

    /// English name
    pub fn name(self) -> &'static str {
        tier(self).name
    }
}

impl fmt::Display for RarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rarity tier information
#[derive(Debug, Clone, PartialEq)]
pub struct RarityTier {
    pub level: RarityLevel,
    /// Lowest probability (percent, inclusive) that still earns this tier
    pub min_probability: f64,
    pub label: &'static str,
    pub name: &'static str,
}

/// All rarity tiers, highest threshold first
pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier {
        level: RarityLevel::VeryCommon,
        min_probability: 10.0,
        label: "매우 흔함",
        name: "Very common",
    },
    RarityTier {
        level: RarityLevel::Common,
        min_probability: 5.0,
        label: "흔함",
        name: "Common",
    },
    RarityTier {
        level: RarityLevel::Average,
        min_probability: 2.0,
        label: "보통",
        name: "Average",
    },
    RarityTier {
        level: RarityLevel::Rare,
        min_probability: 0.5,
        label: "희귀",
        name: "Rare",
    },
    RarityTier {
        level: RarityLevel::VeryRare,
        min_probability: 0.1,
        label: "매우 희귀",
        name: "Very rare",
    },
    RarityTier {
        level: RarityLevel::ExtremelyRare,
        min_probability: f64::NEG_INFINITY,
        label: "극히 희귀",
        name: "Extremely rare",
    },
];

/// Get the tier entry for a level
pub fn tier(level: RarityLevel) -> &'static RarityTier {
    RARITY_TIERS
        .iter()
        .find(|t| t.level == level)
        .unwrap_or(&RARITY_TIERS[RARITY_TIERS.len() - 1])
}

/// Classify a probability (percent); the first tier whose threshold it meets wins
pub fn classify(probability: f64) -> RarityLevel {
    RARITY_TIERS
        .iter()
        .find(|t| probability >= t.min_probability)
        .map_or(RarityLevel::ExtremelyRare, |t| t.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_descend() {
        for pair in RARITY_TIERS.windows(2) {
            assert!(pair[0].min_probability > pair[1].min_probability);
        }
    }

    #[test]
    fn test_boundaries_belong_to_higher_tier() {
        assert_eq!(classify(10.0), RarityLevel::VeryCommon);
        assert_eq!(classify(9.999999), RarityLevel::Common);
        assert_eq!(classify(5.0), RarityLevel::Common);
        assert_eq!(classify(2.0), RarityLevel::Average);
        assert_eq!(classify(0.5), RarityLevel::Rare);
        assert_eq!(classify(0.1), RarityLevel::VeryRare);
        assert_eq!(classify(0.0999), RarityLevel::ExtremelyRare);
        assert_eq!(classify(0.0), RarityLevel::ExtremelyRare);
        assert_eq!(classify(100.0), RarityLevel::VeryCommon);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RarityLevel::VeryCommon.label(), "매우 흔함");
        assert_eq!(RarityLevel::Rare.to_string(), "희귀");
        assert_eq!(RarityLevel::ExtremelyRare.name(), "Extremely rare");
        for t in RARITY_TIERS {
            assert_eq!(tier(t.level).label, t.label);
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&RarityLevel::VeryRare).unwrap();
        assert_eq!(json, "\"매우 희귀\"");
        let back: RarityLevel = serde_json::from_str("\"보통\"").unwrap();
        assert_eq!(back, RarityLevel::Average);
    }
}
