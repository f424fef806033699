//! Condition flags shared by commands that take a condition set

use clap::Args;
use idealtype::{AgeRange, ConditionCategory, ConditionSet, ConditionValue, Span};

use super::core::{parse_age, parse_span};

#[derive(Args, Debug, Default)]
pub struct ConditionArgs {
    /// Gender (남성, 여성)
    #[arg(long)]
    pub gender: Option<String>,

    /// Age range, both ends included (e.g. 25-34)
    #[arg(long, value_parser = parse_age)]
    pub age: Option<AgeRange>,

    /// Height bucket (e.g. 160-165)
    #[arg(long)]
    pub height: Option<String>,

    /// Height span in cm, summing every bucket it overlaps (e.g. 160-175)
    #[arg(long, value_parser = parse_span, conflicts_with = "height")]
    pub height_range: Option<Span>,

    /// Education tier, comma separated for several (SKY, 인서울, 지거국, 4년제, 이하)
    #[arg(long, value_delimiter = ',')]
    pub education: Vec<String>,

    /// Salary bucket (e.g. "5000만원 이상")
    #[arg(long)]
    pub salary: Option<String>,

    /// Salary span in 만원, summing every bucket it overlaps (e.g. 3000-6000)
    #[arg(long, value_parser = parse_span, conflicts_with = "salary")]
    pub salary_range: Option<Span>,

    /// Occupation group, comma separated for several (전문직, 공무원, 공기업, "그 외")
    #[arg(long, value_delimiter = ',')]
    pub job: Vec<String>,

    /// Region tier, comma separated for several (수도권, 지방광역시, 기타)
    #[arg(long, value_delimiter = ',')]
    pub location: Vec<String>,

    /// Marital status (미혼, 기혼, 이혼, 사별)
    #[arg(long)]
    pub marital_status: Option<String>,

    /// Smoking (비흡연, 흡연)
    #[arg(long)]
    pub smoking: Option<String>,
}

impl ConditionArgs {
    /// Argument ids of every condition flag
    pub const FLAGS: [&'static str; 11] = [
        "gender",
        "age",
        "height",
        "height_range",
        "education",
        "salary",
        "salary_range",
        "job",
        "location",
        "marital_status",
        "smoking",
    ];

    /// Build a condition set in form order
    pub fn into_condition_set(self) -> ConditionSet {
        let mut set = ConditionSet::new();

        let values = [
            (ConditionCategory::Gender, code(self.gender)),
            (ConditionCategory::AgeRange, self.age.map(ConditionValue::Range)),
            (
                ConditionCategory::Height,
                self.height_range
                    .map(ConditionValue::Span)
                    .or_else(|| code(self.height)),
            ),
            (ConditionCategory::Education, selection(self.education)),
            (
                ConditionCategory::Salary,
                self.salary_range
                    .map(ConditionValue::Span)
                    .or_else(|| code(self.salary)),
            ),
            (ConditionCategory::Job, selection(self.job)),
            (ConditionCategory::Location, selection(self.location)),
            (ConditionCategory::MaritalStatus, code(self.marital_status)),
            (ConditionCategory::Smoking, code(self.smoking)),
        ];
        for (category, value) in values {
            if let Some(value) = value {
                set.set(category, value);
            }
        }

        set
    }
}

fn code(code: Option<String>) -> Option<ConditionValue> {
    code.filter(|c| !c.is_empty()).map(ConditionValue::Code)
}

/// One code stays a plain code; several become a multi-select
fn selection(codes: Vec<String>) -> Option<ConditionValue> {
    let mut codes: Vec<String> = codes.into_iter().filter(|c| !c.is_empty()).collect();
    match codes.len() {
        0 => None,
        1 => codes.pop().map(ConditionValue::Code),
        _ => Some(ConditionValue::Codes(codes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_empty_args_make_empty_set() {
        assert!(ConditionArgs::default().into_condition_set().is_empty());
    }

    #[test]
    fn test_flags_become_conditions() {
        let args = ConditionArgs {
            age: Some(AgeRange::new(25, 34).unwrap()),
            job: vec!["전문직".to_string()],
            smoking: Some(String::new()),
            ..Default::default()
        };
        let set = args.into_condition_set();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(ConditionCategory::Job),
            Some(&ConditionValue::code("전문직"))
        );
        assert!(!set.contains(ConditionCategory::Smoking));
    }

    #[test]
    fn test_multi_select_and_range_flags() {
        let args = ConditionArgs {
            education: vec!["SKY".to_string(), "인서울".to_string()],
            height_range: Some(Span::new(160, 175).unwrap()),
            salary: Some("5000만원 이상".to_string()),
            ..Default::default()
        };
        let set = args.into_condition_set();

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
        assert_eq!(
            set.get(ConditionCategory::Salary),
            Some(&ConditionValue::code("5000만원 이상"))
        );
    }

    #[test]
    fn test_comma_separated_flag_parses() {
        let cli = Cli::try_parse_from([
            "idealtype",
            "calculate",
            "--location",
            "수도권,지방광역시",
            "--salary-range",
            "3000-6000",
        ])
        .unwrap();
        let Commands::Calculate { conditions, .. } = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(conditions.location, vec!["수도권", "지방광역시"]);
        assert_eq!(conditions.salary_range, Some(Span::new(3000, 6000).unwrap()));
    }

    #[test]
    fn test_range_conflicts_with_bucket() {
        let parsed = Cli::try_parse_from([
            "idealtype",
            "calculate",
            "--height",
            "160-165",
            "--height-range",
            "160-175",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_age_flag() {
        assert!(parse_age("25-34").is_ok());
        assert!(parse_age("34-25").is_err());
    }
}
