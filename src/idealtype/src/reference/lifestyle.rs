//! Gender, marital status and smoking

use super::RatioBucket;

/// Gender of the pool being searched. It selects the reference population
/// rather than narrowing it, so every gender covers its whole pool.
pub const GENDER_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "남성",
        name: "남성",
        ratio: 100.0,
        bounds: None,
    },
    RatioBucket {
        code: "여성",
        name: "여성",
        ratio: 100.0,
        bounds: None,
    },
];

pub const MARITAL_STATUS_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "미혼",
        name: "미혼",
        ratio: 31.4,
        bounds: None,
    },
    RatioBucket {
        code: "기혼",
        name: "기혼",
        ratio: 55.9,
        bounds: None,
    },
    RatioBucket {
        code: "이혼",
        name: "이혼",
        ratio: 7.7,
        bounds: None,
    },
    RatioBucket {
        code: "사별",
        name: "사별",
        ratio: 5.0,
        bounds: None,
    },
];

pub const SMOKING_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "비흡연",
        name: "비흡연",
        ratio: 80.7,
        bounds: None,
    },
    RatioBucket {
        code: "흡연",
        name: "흡연",
        ratio: 19.3,
        bounds: None,
    },
];
