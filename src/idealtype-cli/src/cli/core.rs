//! Core CLI definitions

use clap::{Parser, Subcommand};
use idealtype::{AgeRange, Span, UnknownValuePolicy};
use std::path::PathBuf;

use super::conditions::ConditionArgs;

#[derive(Parser)]
#[command(name = "idealtype")]
#[command(about = "Estimate how rare your ideal type is", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the probability and rarity of a set of conditions
    #[command(visible_alias = "c")]
    Calculate {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Read conditions from a JSON file instead of flags
        /// (e.g. {"height": [160, 175], "education": ["SKY", "인서울"], "age_range": [25, 34]})
        #[arg(short, long, conflicts_with_all = ConditionArgs::FLAGS)]
        input: Option<PathBuf>,

        /// How to treat unrecognized values: zero or skip (uses configured default if not provided)
        #[arg(long)]
        policy: Option<UnknownValuePolicy>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Print a text table even when JSON is the configured default
        #[arg(long, conflicts_with = "json")]
        text: bool,

        /// Show how each condition narrows the population
        #[arg(short, long)]
        explain: bool,
    },

    /// List the reference ratio tables
    #[command(visible_alias = "t")]
    Tables {
        /// Only show one category (e.g. "height", "age_range")
        #[arg(short, long)]
        category: Option<String>,

        /// Show per-category totals instead of individual buckets
        #[arg(long)]
        summary: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rarity tier thresholds
    Rarity,

    /// Configure default settings
    Configure {
        /// Set the default unknown-value policy (zero or skip)
        #[arg(long)]
        policy: Option<UnknownValuePolicy>,

        /// Set whether calculate prints JSON by default
        #[arg(long)]
        json: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Parse an age range flag such as "25-34"
pub fn parse_age(s: &str) -> Result<AgeRange, String> {
    s.parse::<AgeRange>().map_err(|e| e.to_string())
}

/// Parse a numeric span flag such as "160-175"
pub fn parse_span(s: &str) -> Result<Span, String> {
    s.parse::<Span>().map_err(|e| e.to_string())
}
