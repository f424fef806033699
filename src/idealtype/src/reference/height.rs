//! Height distribution

use super::RatioBucket;

/// Adult height in 5cm buckets (lower bound inclusive)
pub const HEIGHT_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "150-155",
        name: "150~155cm",
        ratio: 6.2,
        bounds: Some((150, 155)),
    },
    RatioBucket {
        code: "155-160",
        name: "155~160cm",
        ratio: 15.4,
        bounds: Some((155, 160)),
    },
    RatioBucket {
        code: "160-165",
        name: "160~165cm",
        ratio: 25.8,
        bounds: Some((160, 165)),
    },
    RatioBucket {
        code: "165-170",
        name: "165~170cm",
        ratio: 22.7,
        bounds: Some((165, 170)),
    },
    RatioBucket {
        code: "170-175",
        name: "170~175cm",
        ratio: 16.9,
        bounds: Some((170, 175)),
    },
    RatioBucket {
        code: "175-180",
        name: "175~180cm",
        ratio: 9.1,
        bounds: Some((175, 180)),
    },
    RatioBucket {
        code: "180-185",
        name: "180~185cm",
        ratio: 3.9,
        bounds: Some((180, 185)),
    },
];
