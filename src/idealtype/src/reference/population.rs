//! Reference population counts

use serde::Serialize;

/// Resident registration totals used to turn percentages into head-counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Population {
    pub total: u64,
    pub male: u64,
    pub female: u64,
}

impl Population {
    /// Head-count of one gender ("남성" or "여성")
    pub fn of_gender(&self, gender: &str) -> Option<u64> {
        match gender {
            "남성" => Some(self.male),
            "여성" => Some(self.female),
            _ => None,
        }
    }
}

/// Nationwide resident population
pub const NATION_POPULATION: Population = Population {
    total: 51_169_148,
    male: 25_470_398,
    female: 25_698_750,
};
