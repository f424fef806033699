//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up idealtype CLI defaults.

use crate::config::Config;
use anyhow::Result;
use idealtype::UnknownValuePolicy;
use std::path::Path;

/// Handle the configure command
///
/// # Arguments
/// * `policy` - Optional unknown-value policy to set as default
/// * `json` - Optional default output format
/// * `show` - If true, show current configuration
pub fn handle(policy: Option<UnknownValuePolicy>, json: Option<bool>, show: bool) -> Result<()> {
    if show {
        show_config(&Config::load()?);
        return Ok(());
    }

    if policy.is_none() && json.is_none() {
        show_usage();
        return Ok(());
    }

    let path = Config::config_path()?;
    let config = update(&path, policy, json)?;

    println!("Policy: {}", config.policy());
    println!("JSON output: {}", config.json);
    println!("Config saved to: {}", path.display());

    Ok(())
}

/// Load the config at `path`, merge the settings and write it back
fn update(path: &Path, policy: Option<UnknownValuePolicy>, json: Option<bool>) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    apply(&mut config, policy, json);
    config.save_to(path)?;
    Ok(config)
}

/// Merge the provided settings into the config
fn apply(config: &mut Config, policy: Option<UnknownValuePolicy>, json: Option<bool>) {
    if let Some(policy) = policy {
        config.policy = Some(policy);
    }
    if let Some(json) = json {
        config.json = json;
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.policy {
        Some(policy) => println!("Policy: {}", policy),
        None => println!("Policy: {} (default)", config.policy()),
    }
    println!("JSON output: {}", config.json);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: idealtype configure --policy zero|skip");
    println!("   or: idealtype configure --json true|false");
    println!("   or: idealtype configure --show");
    println!();
    println!("Note: the policy decides what an unrecognized condition value does.");
    println!("      zero collapses the probability to 0%, skip ignores the condition.");
}
