//! Education tiers

use super::RatioBucket;

/// Highest completed education, grouped by school tier
pub const EDUCATION_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "SKY",
        name: "SKY",
        ratio: 3.2,
        bounds: None,
    },
    RatioBucket {
        code: "인서울",
        name: "서울 소재 4년제",
        ratio: 9.5,
        bounds: None,
    },
    RatioBucket {
        code: "지거국",
        name: "지방 거점 국립대",
        ratio: 14.6,
        bounds: None,
    },
    RatioBucket {
        code: "4년제",
        name: "4년제 대학",
        ratio: 45.3,
        bounds: None,
    },
    RatioBucket {
        code: "이하",
        name: "전문대 이하",
        ratio: 27.4,
        bounds: None,
    },
];
