//! CLI argument definitions for idealtype
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod conditions;
mod core;

pub use conditions::ConditionArgs;
pub use core::{Cli, Commands};
