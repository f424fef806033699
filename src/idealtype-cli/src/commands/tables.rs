//! Ratio table listing

use anyhow::{Context, Result};
use idealtype::{ConditionCategory, RatioTables};
use serde_json::json;
use std::fmt::Write as _;

/// Handle the tables command
pub fn handle(category: Option<&str>, summary: bool, json: bool) -> Result<()> {
    let tables = RatioTables::standard();
    let categories = match category {
        Some(key) => vec![key
            .parse::<ConditionCategory>()
            .with_context(|| format!("No table named '{}'", key))?],
        None => ConditionCategory::ALL.to_vec(),
    };

    let output = if summary {
        render_summary(&tables, json)?
    } else if json {
        render_json(&tables, &categories)?
    } else {
        render_text(&tables, &categories)
    };
    print!("{}", output);

    Ok(())
}

fn render_summary(tables: &RatioTables, json: bool) -> Result<String> {
    let summary = tables.summary();
    if json {
        let mut out =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {:>8} {:>10}", "Category", "Buckets", "Coverage");
    let _ = writeln!(out, "{}", "-".repeat(36));
    for c in &summary.categories {
        let _ = writeln!(
            out,
            "{:<16} {:>8} {:>9.1}%",
            c.category, c.buckets, c.coverage
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Population:  {}", summary.population.total);
    let _ = writeln!(out, "Method:      {}", summary.calculation_method);
    Ok(out)
}

fn render_json(tables: &RatioTables, categories: &[ConditionCategory]) -> Result<String> {
    let mut map = serde_json::Map::new();
    for &category in categories {
        let value = match category {
            ConditionCategory::AgeRange => json!(tables
                .age_bands()
                .iter()
                .map(|b| json!({ "start": b.start, "end": b.end, "share": b.share }))
                .collect::<Vec<_>>()),
            _ => serde_json::to_value(tables.buckets(category))
                .context("Failed to serialize table")?,
        };
        map.insert(category.key().to_string(), value);
    }
    let mut out = serde_json::to_string_pretty(&map).context("Failed to serialize tables")?;
    out.push('\n');
    Ok(out)
}

fn render_text(tables: &RatioTables, categories: &[ConditionCategory]) -> String {
    let mut out = String::new();

    for (i, &category) in categories.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{} ({})", category.name(), category.key());

        if category == ConditionCategory::AgeRange {
            for band in tables.age_bands() {
                let _ = writeln!(
                    out,
                    "  {:<20} {:>6.1}%",
                    format!("{}-{}", band.start, band.end),
                    band.share
                );
            }
            continue;
        }

        for bucket in tables.buckets(category) {
            let _ = writeln!(out, "  {:<20} {:>6.1}%", bucket.code, bucket.ratio);
        }
    }

    out
}
