//! Calculate command handler
//!
//! Builds a condition set from flags or a JSON file, runs the estimator and
//! prints the result.

use crate::cli::ConditionArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use idealtype::{
    ConditionSet, Estimator, ExplanationStep, MatchResult, RatioTables, UnknownValuePolicy,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Result plus the head-count estimate, as printed with `--json`
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a MatchResult,
    estimated_population: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Vec<ExplanationStep>>,
}

/// Output format requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Follow the configured default
    Configured,
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_flags(json: bool, text: bool) -> Self {
        match (json, text) {
            (true, _) => OutputFormat::Json,
            (false, true) => OutputFormat::Text,
            (false, false) => OutputFormat::Configured,
        }
    }

    /// Whether to print JSON, given the configured default
    pub fn is_json(self, config: &Config) -> bool {
        match self {
            OutputFormat::Configured => config.json,
            OutputFormat::Json => true,
            OutputFormat::Text => false,
        }
    }
}

/// Handle the calculate command
///
/// # Arguments
/// * `conditions` - Condition flags (ignored when `input` is given)
/// * `input` - Optional JSON file holding the condition set
/// * `policy` - Unknown-value policy override
/// * `format` - JSON, text, or whatever the config says
/// * `explain` - Include the step-by-step population funnel
pub fn handle(
    conditions: ConditionArgs,
    input: Option<&Path>,
    policy: Option<UnknownValuePolicy>,
    format: OutputFormat,
    explain: bool,
) -> Result<()> {
    let config = Config::load()?;
    let policy = policy.unwrap_or_else(|| config.policy());

    let set = match input {
        Some(path) => load_conditions(path)?,
        None => conditions.into_condition_set(),
    };

    tracing::debug!(conditions = set.len(), %policy, "calculating");

    let estimator = Estimator::new(RatioTables::standard()).with_policy(policy);
    let output = if format.is_json(&config) {
        render_json(&estimator, &set, explain)?
    } else {
        render_text(&estimator, &set, explain)
    };
    print!("{}", output);

    Ok(())
}

/// Read a condition set from a JSON file
pub fn load_conditions(path: &Path) -> Result<ConditionSet> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read conditions from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse conditions in {}", path.display()))
}

fn render_json(estimator: &Estimator, set: &ConditionSet, explain: bool) -> Result<String> {
    let result = estimator.estimate(set);
    let report = Report {
        result: &result,
        estimated_population: estimator.estimated_population(set, &result),
        explanation: explain.then(|| estimator.explain(set)),
    };
    let mut out = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
    out.push('\n');
    Ok(out)
}

fn render_text(estimator: &Estimator, set: &ConditionSet, explain: bool) -> String {
    let result = estimator.estimate(set);
    let mut out = String::new();

    let _ = writeln!(out, "Probability: {:.2}%", result.probability);
    let _ = writeln!(
        out,
        "Rarity:      {} ({})",
        result.rarity_level,
        result.rarity_level.name()
    );
    let _ = writeln!(
        out,
        "Matches:     ~{} of {} people",
        estimator.estimated_population(set, &result),
        estimator.base_population(set)
    );
    let _ = writeln!(out, "Conditions:  {}", result.total_conditions);

    if result.total_conditions > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<16} {:<16} {:>8}", "Condition", "Value", "Ratio");
        let _ = writeln!(out, "{}", "-".repeat(42));
        for (category, value) in set.iter() {
            let ratio = match result.condition_ratios.get(category) {
                Some(r) => format!("{:.1}%", r),
                None => "skipped".to_string(),
            };
            let _ = writeln!(out, "{:<16} {:<16} {:>8}", category.key(), value, ratio);
        }
    }

    if explain {
        let steps = estimator.explain(set);
        if !steps.is_empty() {
            let _ = writeln!(out);
            for step in steps {
                let _ = writeln!(
                    out,
                    "{:<16} x{:>6.1}%  {:>6.2}% -> {:>6.2}%  {:>10} -> {:>10}",
                    step.category.key(),
                    step.applied_ratio,
                    step.from_percent,
                    step.to_percent,
                    step.from_count,
                    step.to_count
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use idealtype::ConditionCategory;

    fn sample() -> ConditionSet {
        ConditionSet::new()
            .with(ConditionCategory::Job, "전문직")
            .with(ConditionCategory::Salary, "5000만원 이상")
    }

    #[test]
    fn test_load_conditions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conditions.json");
        fs::write(&path, r#"{"job": "전문직", "salary": "5000만원 이상"}"#).unwrap();

        let set = load_conditions(&path).unwrap();
        assert_eq!(set, sample());
    }

    #[test]
    fn test_load_conditions_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_conditions(&dir.path().join("missing.json")).is_err());

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"age_range": [50, 20]}"#).unwrap();
        assert!(load_conditions(&path).is_err());
    }

    #[test]
    fn test_render_text() {
        let out = render_text(&Estimator::default(), &sample(), false);
        assert!(out.contains("Probability: 0.88%"));
        assert!(out.contains("희귀 (Rare)"));
        assert!(out.contains("12.5%"));
    }

    #[test]
    fn test_render_text_marks_skipped() {
        let set = ConditionSet::new().with(ConditionCategory::Job, "우주비행사");
        let estimator = Estimator::default().with_policy(UnknownValuePolicy::Skip);
        let out = render_text(&estimator, &set, false);
        assert!(out.contains("skipped"));
        assert!(out.contains("Probability: 100.00%"));
    }

    #[test]
    fn test_render_json() {
        let out = render_json(&Estimator::default(), &sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["probability"], 0.88);
        assert_eq!(value["rarity_level"], "희귀");
        assert_eq!(value["condition_ratios"]["job"], 12.5);
        assert_eq!(value["total_conditions"], 2);
        assert_eq!(value["explanation"].as_array().map(Vec::len), Some(2));
        assert!(value["estimated_population"].as_u64().is_some());
    }

    #[test]
    fn test_text_flag_overrides_configured_json() {
        let config = Config {
            policy: None,
            json: true,
        };
        assert!(OutputFormat::from_flags(false, false).is_json(&config));
        assert!(!OutputFormat::from_flags(false, true).is_json(&config));

        let config = Config::default();
        assert!(!OutputFormat::from_flags(false, false).is_json(&config));
        assert!(OutputFormat::from_flags(true, false).is_json(&config));
    }

    #[test]
    fn test_render_json_counts_from_gender_population() {
        let set = sample().with(ConditionCategory::Gender, "여성");
        let estimator = Estimator::default();
        let out = render_json(&estimator, &set, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let female = estimator.tables().population().female;
        assert_eq!(value["probability"], 0.88);
        assert_eq!(value["condition_ratios"]["gender"], 100.0);
        assert_eq!(value["explanation"][0]["from_count"], female);
        assert_eq!(
            value["estimated_population"],
            (female as f64 * 0.0088).round() as u64
        );
    }

    #[test]
    fn test_render_json_without_explanation() {
        let out = render_json(&Estimator::default(), &sample(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("explanation").is_none());
    }
}
