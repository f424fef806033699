//! Condition ratio resolution
//!
//! Turns a [`ConditionSet`] into the per-category percentages the composer
//! multiplies together.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::condition::{ConditionCategory, ConditionError, ConditionSet};
use crate::reference::RatioTables;

/// What an unrecognized condition value contributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownValuePolicy {
    /// Resolve to 0%, which collapses the aggregate probability to 0
    #[default]
    Zero,
    /// Leave the condition out of the composition entirely
    Skip,
}

impl UnknownValuePolicy {
    /// Ratio an unrecognized value resolves to, or `None` to drop it
    pub fn ratio_for_unknown(self) -> Option<f64> {
        match self {
            UnknownValuePolicy::Zero => Some(0.0),
            UnknownValuePolicy::Skip => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnknownValuePolicy::Zero => "zero",
            UnknownValuePolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for UnknownValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownValuePolicy {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(UnknownValuePolicy::Zero),
            "skip" => Ok(UnknownValuePolicy::Skip),
            _ => Err(ConditionError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Resolved percentage per category, in caller order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionRatios {
    entries: Vec<(ConditionCategory, f64)>,
}

impl ConditionRatios {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ratio, replacing any earlier one for the same category
    pub fn insert(&mut self, category: ConditionCategory, ratio: f64) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = ratio,
            None => self.entries.push((category, ratio)),
        }
    }

    pub fn get(&self, category: ConditionCategory) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, r)| *r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in caller order
    pub fn iter(&self) -> impl Iterator<Item = (ConditionCategory, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries sorted by category key, the order composition uses
    pub fn sorted_by_key(&self) -> Vec<(ConditionCategory, f64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|(c, _)| c.key());
        sorted
    }
}

impl FromIterator<(ConditionCategory, f64)> for ConditionRatios {
    fn from_iter<I: IntoIterator<Item = (ConditionCategory, f64)>>(iter: I) -> Self {
        let mut ratios = ConditionRatios::new();
        for (category, ratio) in iter {
            ratios.insert(category, ratio);
        }
        ratios
    }
}

impl Serialize for ConditionRatios {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, ratio) in &self.entries {
            map.serialize_entry(category, ratio)?;
        }
        map.end()
    }
}

/// Look up every set condition's ratio
///
/// Unknown values are handed to `policy`; with the default
/// [`UnknownValuePolicy::Zero`] they resolve to 0.
pub fn resolve(
    tables: &RatioTables,
    conditions: &ConditionSet,
    policy: UnknownValuePolicy,
) -> ConditionRatios {
    let mut ratios = ConditionRatios::new();

    for (category, value) in conditions.iter() {
        let ratio = match tables.lookup(category, value) {
            Some(ratio) => Some(ratio),
            None => {
                debug!(%category, %value, %policy, "unrecognized condition value");
                policy.ratio_for_unknown()
            }
        };
        if let Some(ratio) = ratio {
            ratios.insert(category, ratio);
        }
    }

    ratios
}
