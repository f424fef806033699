//! Salary and occupation distributions

use super::RatioBucket;

/// Annual salary (만원)
pub const SALARY_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "2000만원 이하",
        name: "2천만원 이하",
        ratio: 38.4,
        bounds: Some((0, 2000)),
    },
    RatioBucket {
        code: "2000-3000만원",
        name: "2천~3천만원",
        ratio: 24.1,
        bounds: Some((2000, 3000)),
    },
    RatioBucket {
        code: "3000-4000만원",
        name: "3천~4천만원",
        ratio: 17.6,
        bounds: Some((3000, 4000)),
    },
    RatioBucket {
        code: "4000-5000만원",
        name: "4천~5천만원",
        ratio: 12.9,
        bounds: Some((4000, 5000)),
    },
    RatioBucket {
        code: "5000만원 이상",
        name: "5천만원 이상",
        ratio: 7.0,
        bounds: Some((5000, u32::MAX)),
    },
];

/// Occupation group
pub const JOB_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "전문직",
        name: "전문직",
        ratio: 12.5,
        bounds: None,
    },
    RatioBucket {
        code: "공무원",
        name: "공무원",
        ratio: 8.3,
        bounds: None,
    },
    RatioBucket {
        code: "공기업",
        name: "공기업",
        ratio: 4.6,
        bounds: None,
    },
    RatioBucket {
        code: "그 외",
        name: "그 외",
        ratio: 74.6,
        bounds: None,
    },
];
