//! Region tiers

use super::RatioBucket;

/// Residence, grouped into capital area / metropolitan cities / elsewhere
pub const LOCATION_BUCKETS: &[RatioBucket] = &[
    RatioBucket {
        code: "수도권",
        name: "수도권 (서울·경기·인천)",
        ratio: 45.8,
        bounds: None,
    },
    RatioBucket {
        code: "지방광역시",
        name: "지방 광역시",
        ratio: 26.9,
        bounds: None,
    },
    RatioBucket {
        code: "기타",
        name: "그 외 지역",
        ratio: 27.3,
        bounds: None,
    },
];
