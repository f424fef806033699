//! Partner-preference conditions
//!
//! A [`ConditionSet`] is what a caller hands to the estimator: an ordered
//! mapping from [`ConditionCategory`] to the selected [`ConditionValue`].
//! Categories that were never set are simply absent.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Youngest age a condition may name
pub const MIN_AGE: u8 = 18;

/// Oldest age a condition may name
pub const MAX_AGE: u8 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Unknown condition category: {0}")]
    UnknownCategory(String),

    #[error("Age range {min}-{max} must lie within 18-100")]
    AgeOutOfBounds { min: u8, max: u8 },

    #[error("Age range minimum {min} must be below maximum {max}")]
    AgeRangeInverted { min: u8, max: u8 },

    #[error("Invalid age range: {0} (expected e.g. 25-34)")]
    InvalidAgeRange(String),

    #[error("Range minimum {min} must be below maximum {max}")]
    SpanInverted { min: u32, max: u32 },

    #[error("Invalid range: {0} (expected e.g. 160-175)")]
    InvalidSpan(String),

    #[error("Unknown value policy: {0} (expected zero or skip)")]
    UnknownPolicy(String),
}

/// One selectable preference dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Gender,
    AgeRange,
    Height,
    Education,
    Salary,
    Job,
    Location,
    MaritalStatus,
    Smoking,
}

impl ConditionCategory {
    /// All categories in form order
    pub const ALL: [ConditionCategory; 9] = [
        ConditionCategory::Gender,
        ConditionCategory::AgeRange,
        ConditionCategory::Height,
        ConditionCategory::Education,
        ConditionCategory::Salary,
        ConditionCategory::Job,
        ConditionCategory::Location,
        ConditionCategory::MaritalStatus,
        ConditionCategory::Smoking,
    ];

    /// Wire key, as used in request bodies and serialized results
    pub fn key(self) -> &'static str {
        match self {
            ConditionCategory::Gender => "gender",
            ConditionCategory::AgeRange => "age_range",
            ConditionCategory::Height => "height",
            ConditionCategory::Education => "education",
            ConditionCategory::Salary => "salary",
            ConditionCategory::Job => "job",
            ConditionCategory::Location => "location",
            ConditionCategory::MaritalStatus => "marital_status",
            ConditionCategory::Smoking => "smoking",
        }
    }

    /// Korean display name
    pub fn name(self) -> &'static str {
        match self {
            ConditionCategory::Gender => "성별",
            ConditionCategory::AgeRange => "나이",
            ConditionCategory::Height => "키",
            ConditionCategory::Education => "학력",
            ConditionCategory::Salary => "연봉",
            ConditionCategory::Job => "직업",
            ConditionCategory::Location => "지역",
            ConditionCategory::MaritalStatus => "결혼 여부",
            ConditionCategory::Smoking => "흡연 여부",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for ConditionCategory {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ConditionError::UnknownCategory(s.to_string()))
    }
}

/// Inclusive age range, always within 18-100 with `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeRange {
    min: u8,
    max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Result<Self, ConditionError> {
        if min < MIN_AGE || max > MAX_AGE {
            return Err(ConditionError::AgeOutOfBounds { min, max });
        }
        if min >= max {
            return Err(ConditionError::AgeRangeInverted { min, max });
        }
        Ok(AgeRange { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of whole years covered (both ends included)
    pub fn years(&self) -> u32 {
        u32::from(self.max - self.min) + 1
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for AgeRange {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConditionError::InvalidAgeRange(s.to_string());
        let (lo, hi) = s.split_once(['-', '~']).ok_or_else(invalid)?;
        let min = lo.trim().parse::<u8>().map_err(|_| invalid())?;
        let max = hi.trim().parse::<u8>().map_err(|_| invalid())?;
        AgeRange::new(min, max)
    }
}

impl Serialize for AgeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AgeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [min, max] = <[u8; 2]>::deserialize(deserializer)?;
        AgeRange::new(min, max).map_err(de::Error::custom)
    }
}

/// Numeric span over a bucketed table (cm for height, 만원 for salary)
///
/// The lower bound is included and the upper bound is not, matching how the
/// table buckets are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    min: u32,
    max: u32,
}

impl Span {
    pub fn new(min: u32, max: u32) -> Result<Self, ConditionError> {
        if min >= max {
            return Err(ConditionError::SpanInverted { min, max });
        }
        Ok(Span { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// True when the half-open bucket `[lower, upper)` shares any part of the span
    pub fn overlaps(&self, lower: u32, upper: u32) -> bool {
        lower < self.max && upper > self.min
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for Span {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConditionError::InvalidSpan(s.to_string());
        let (lo, hi) = s.split_once(['-', '~']).ok_or_else(invalid)?;
        let min = lo.trim().parse::<u32>().map_err(|_| invalid())?;
        let max = hi.trim().parse::<u32>().map_err(|_| invalid())?;
        Span::new(min, max)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [min, max] = <[u32; 2]>::deserialize(deserializer)?;
        Span::new(min, max).map_err(de::Error::custom)
    }
}

/// Selected value for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// Age bounds, only meaningful for [`ConditionCategory::AgeRange`]
    Range(AgeRange),
    /// Bucket code such as `"160-165"` or `"4년제"`
    Code(String),
    /// Several acceptable bucket codes; their shares add up
    Codes(Vec<String>),
    /// Numeric span covering every bucket it overlaps
    Span(Span),
}

impl ConditionValue {
    pub fn code(code: impl Into<String>) -> Self {
        ConditionValue::Code(code.into())
    }
}

impl From<AgeRange> for ConditionValue {
    fn from(range: AgeRange) -> Self {
        ConditionValue::Range(range)
    }
}

impl From<Span> for ConditionValue {
    fn from(span: Span) -> Self {
        ConditionValue::Span(span)
    }
}

impl From<Vec<String>> for ConditionValue {
    fn from(codes: Vec<String>) -> Self {
        ConditionValue::Codes(codes)
    }
}

impl From<&str> for ConditionValue {
    fn from(code: &str) -> Self {
        ConditionValue::Code(code.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(code: String) -> Self {
        ConditionValue::Code(code)
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Range(range) => f.pad(&range.to_string()),
            ConditionValue::Code(code) => f.pad(code),
            ConditionValue::Codes(codes) => f.pad(&codes.join(", ")),
            ConditionValue::Span(span) => f.pad(&span.to_string()),
        }
    }
}

/// Ordered set of selected conditions
///
/// Iteration follows insertion order. Setting a category that is already
/// present replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    entries: Vec<(ConditionCategory, ConditionValue)>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category, replacing any previous value in place
    pub fn set(&mut self, category: ConditionCategory, value: impl Into<ConditionValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((category, value)),
        }
    }

    /// Builder form of [`ConditionSet::set`]
    pub fn with(mut self, category: ConditionCategory, value: impl Into<ConditionValue>) -> Self {
        self.set(category, value);
        self
    }

    pub fn remove(&mut self, category: ConditionCategory) -> Option<ConditionValue> {
        let idx = self.entries.iter().position(|(c, _)| *c == category)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, category: ConditionCategory) -> Option<&ConditionValue> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, category: ConditionCategory) -> bool {
        self.get(category).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConditionCategory, &ConditionValue)> {
        self.entries.iter().map(|(c, v)| (*c, v))
    }
}

impl FromIterator<(ConditionCategory, ConditionValue)> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = (ConditionCategory, ConditionValue)>>(iter: I) -> Self {
        let mut set = ConditionSet::new();
        for (category, value) in iter {
            set.set(category, value);
        }
        set
    }
}

impl Serialize for ConditionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, value) in &self.entries {
            map.serialize_entry(category, value)?;
        }
        map.end()
    }
}

/// Wire shapes accepted for a categorical condition
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Code(String),
    Codes(Vec<String>),
    Span(Span),
}

impl RawValue {
    /// Drop empty selections; `None` means the field was left untouched
    fn into_value(self) -> Option<ConditionValue> {
        match self {
            RawValue::Code(code) if code.is_empty() => None,
            RawValue::Code(code) => Some(ConditionValue::Code(code)),
            RawValue::Codes(codes) => {
                let codes: Vec<String> = codes.into_iter().filter(|c| !c.is_empty()).collect();
                (!codes.is_empty()).then_some(ConditionValue::Codes(codes))
            }
            RawValue::Span(span) => Some(ConditionValue::Span(span)),
        }
    }
}

struct ConditionSetVisitor;

impl<'de> Visitor<'de> for ConditionSetVisitor {
    type Value = ConditionSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of condition category to value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut set = ConditionSet::new();
        while let Some(category) = map.next_key::<ConditionCategory>()? {
            // null and "" both mean the field was left untouched
            let value = match category {
                ConditionCategory::AgeRange => map
                    .next_value::<Option<AgeRange>>()?
                    .map(ConditionValue::Range),
                _ => map
                    .next_value::<Option<RawValue>>()?
                    .and_then(RawValue::into_value),
            };
            match value {
                Some(value) => set.set(category, value),
                None => {
                    set.remove(category);
                }
            }
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ConditionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ConditionSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip() {
        for category in ConditionCategory::ALL {
            assert_eq!(category.key().parse::<ConditionCategory>(), Ok(category));
        }
        assert_eq!(
            "hobby".parse::<ConditionCategory>(),
            Err(ConditionError::UnknownCategory("hobby".to_string()))
        );
    }

    #[test]
    fn test_age_range_bounds() {
        assert!(AgeRange::new(18, 100).is_ok());
        assert_eq!(
            AgeRange::new(17, 30),
            Err(ConditionError::AgeOutOfBounds { min: 17, max: 30 })
        );
        assert_eq!(
            AgeRange::new(30, 101),
            Err(ConditionError::AgeOutOfBounds { min: 30, max: 101 })
        );
        assert_eq!(
            AgeRange::new(30, 30),
            Err(ConditionError::AgeRangeInverted { min: 30, max: 30 })
        );
        assert_eq!(AgeRange::new(25, 34).unwrap().years(), 10);
    }

    #[test]
    fn test_age_range_parse() {
        let range: AgeRange = "25-34".parse().unwrap();
        assert_eq!((range.min(), range.max()), (25, 34));
        assert_eq!("25~34".parse::<AgeRange>(), Ok(range));
        assert!(matches!(
            "25".parse::<AgeRange>(),
            Err(ConditionError::InvalidAgeRange(_))
        ));
        assert!(matches!(
            "a-b".parse::<AgeRange>(),
            Err(ConditionError::InvalidAgeRange(_))
        ));
        assert_eq!(range.to_string(), "25-34");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut set = ConditionSet::new()
            .with(ConditionCategory::Job, "전문직")
            .with(ConditionCategory::Height, "160-165");
        set.set(ConditionCategory::Job, "공무원");

        let order: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![ConditionCategory::Job, ConditionCategory::Height]);
        assert_eq!(
            set.get(ConditionCategory::Job),
            Some(&ConditionValue::code("공무원"))
        );

        assert!(set.remove(ConditionCategory::Job).is_some());
        assert!(!set.contains(ConditionCategory::Job));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"smoking": "비흡연", "age_range": [25, 34], "education": "SKY"}"#;
        let set: ConditionSet = serde_json::from_str(json).unwrap();

        let order: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                ConditionCategory::Smoking,
                ConditionCategory::AgeRange,
                ConditionCategory::Education,
            ]
        );
        assert_eq!(
            set.get(ConditionCategory::AgeRange),
            Some(&ConditionValue::Range(AgeRange::new(25, 34).unwrap()))
        );
    }

    #[test]
    fn test_deserialize_skips_untouched_fields() {
        let json = r#"{"height": "", "job": null, "location": "수도권"}"#;
        let set: ConditionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(ConditionCategory::Location));
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        assert!(serde_json::from_str::<ConditionSet>(r#"{"hobby": "golf"}"#).is_err());
        assert!(serde_json::from_str::<ConditionSet>(r#"{"age_range": [40, 30]}"#).is_err());
        assert!(serde_json::from_str::<ConditionSet>(r#"{"age_range": "25-34"}"#).is_err());
        assert!(serde_json::from_str::<ConditionSet>(r#"{"height": 160}"#).is_err());
    }

    #[test]
    fn test_span_bounds() {
        let span: Span = "160-175".parse().unwrap();
        assert_eq!((span.min(), span.max()), (160, 175));
        assert_eq!("160~175".parse::<Span>(), Ok(span));
        assert_eq!(
            Span::new(175, 160),
            Err(ConditionError::SpanInverted { min: 175, max: 160 })
        );
        assert!(matches!(
            "tall".parse::<Span>(),
            Err(ConditionError::InvalidSpan(_))
        ));

        // Buckets touching only at an edge do not overlap
        assert!(span.overlaps(170, 175));
        assert!(span.overlaps(150, 161));
        assert!(!span.overlaps(155, 160));
        assert!(!span.overlaps(175, 180));
    }

    #[test]
    fn test_deserialize_multi_select_and_span() {
        let json = r#"{"education": ["SKY", "", "인서울"], "height": [160, 175], "job": []}"#;
        let set: ConditionSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(ConditionCategory::Education),
            Some(&ConditionValue::Codes(vec![
                "SKY".to_string(),
                "인서울".to_string()
            ]))
        );
        assert_eq!(
            set.get(ConditionCategory::Height),
            Some(&ConditionValue::Span(Span::new(160, 175).unwrap()))
        );
        assert!(!set.contains(ConditionCategory::Job));

        assert!(serde_json::from_str::<ConditionSet>(r#"{"salary": [6000, 3000]}"#).is_err());
    }

    #[test]
    fn test_multi_value_display() {
        let codes = ConditionValue::Codes(vec!["SKY".to_string(), "인서울".to_string()]);
        assert_eq!(codes.to_string(), "SKY, 인서울");
        let span = ConditionValue::Span(Span::new(3000, 6000).unwrap());
        assert_eq!(span.to_string(), "3000-6000");
    }

    #[test]
    fn test_serialize_matches_wire_shape() {
        let set = ConditionSet::new()
            .with(ConditionCategory::AgeRange, AgeRange::new(25, 34).unwrap())
            .with(ConditionCategory::Height, "160-165");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"age_range":[25,34],"height":"160-165"}"#);

        let set = ConditionSet::new()
            .with(ConditionCategory::Salary, Span::new(3000, 6000).unwrap())
            .with(ConditionCategory::Location, vec!["수도권".to_string()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"salary":[3000,6000],"location":["수도권"]}"#);
    }
}
