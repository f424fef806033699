//! Age band population shares

use crate::condition::AgeRange;

/// Share of the 18-100 population falling in one age band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    /// First year of the band
    pub start: u8,
    /// Last year of the band (inclusive)
    pub end: u8,
    /// Percentage of the 18-100 population
    pub share: f64,
}

impl AgeBand {
    pub fn years(&self) -> u32 {
        u32::from(self.end - self.start) + 1
    }

    /// Years of this band that fall inside `range`
    fn overlap(&self, range: &AgeRange) -> u32 {
        let lo = self.start.max(range.min());
        let hi = self.end.min(range.max());
        if lo > hi {
            0
        } else {
            u32::from(hi - lo) + 1
        }
    }
}

/// Resident population aged 18-100 by band. Shares sum to 100.
pub const AGE_BANDS: &[AgeBand] = &[
    AgeBand {
        start: 18,
        end: 19,
        share: 2.2,
    },
    AgeBand {
        start: 20,
        end: 24,
        share: 6.2,
    },
    AgeBand {
        start: 25,
        end: 29,
        share: 7.4,
    },
    AgeBand {
        start: 30,
        end: 34,
        share: 7.6,
    },
    AgeBand {
        start: 35,
        end: 39,
        share: 7.2,
    },
    AgeBand {
        start: 40,
        end: 44,
        share: 8.4,
    },
    AgeBand {
        start: 45,
        end: 49,
        share: 8.6,
    },
    AgeBand {
        start: 50,
        end: 54,
        share: 9.6,
    },
    AgeBand {
        start: 55,
        end: 59,
        share: 9.4,
    },
    AgeBand {
        start: 60,
        end: 64,
        share: 9.5,
    },
    AgeBand {
        start: 65,
        end: 69,
        share: 7.6,
    },
    AgeBand {
        start: 70,
        end: 74,
        share: 5.4,
    },
    AgeBand {
        start: 75,
        end: 79,
        share: 4.2,
    },
    AgeBand {
        start: 80,
        end: 84,
        share: 3.6,
    },
    AgeBand {
        start: 85,
        end: 100,
        share: 3.1,
    },
];

/// Percentage of the population whose age falls inside `range`
///
/// Each band contributes its share scaled by the fraction of its years the
/// range covers, so partial bands are spread evenly across their years.
pub fn age_range_ratio(bands: &[AgeBand], range: &AgeRange) -> f64 {
    let ratio: f64 = bands
        .iter()
        .map(|band| band.share * f64::from(band.overlap(range)) / f64::from(band.years()))
        .sum();
    ratio.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: u8, max: u8) -> AgeRange {
        AgeRange::new(min, max).unwrap()
    }

    #[test]
    fn test_bands_cover_adult_years() {
        assert_eq!(AGE_BANDS.first().map(|b| b.start), Some(18));
        assert_eq!(AGE_BANDS.last().map(|b| b.end), Some(100));
        for pair in AGE_BANDS.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start);
        }
        let total: f64 = AGE_BANDS.iter().map(|b| b.share).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_range_is_everyone() {
        let ratio = age_range_ratio(AGE_BANDS, &range(18, 100));
        assert!((ratio - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_whole_bands() {
        // 25-29 and 30-34
        let ratio = age_range_ratio(AGE_BANDS, &range(25, 34));
        assert!((ratio - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_band_is_prorated() {
        // 3 of the 5 years in 30-34
        let ratio = age_range_ratio(AGE_BANDS, &range(30, 32));
        assert!((ratio - 7.6 * 3.0 / 5.0).abs() < 1e-9);
    }
}
