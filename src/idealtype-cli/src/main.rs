mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let default_filter = if cli.verbose {
        "idealtype=debug,idealtype_cli=debug"
    } else {
        "idealtype=warn,idealtype_cli=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Calculate {
            conditions,
            input,
            policy,
            json,
            text,
            explain,
        } => {
            let format = commands::calculate::OutputFormat::from_flags(json, text);
            commands::calculate::handle(conditions, input.as_deref(), policy, format, explain)?;
        }

        Commands::Tables {
            category,
            summary,
            json,
        } => {
            commands::tables::handle(category.as_deref(), summary, json)?;
        }

        Commands::Rarity => {
            commands::rarity::handle()?;
        }

        Commands::Configure { policy, json, show } => {
            commands::configure::handle(policy, json, show)?;
        }
    }

    Ok(())
}
