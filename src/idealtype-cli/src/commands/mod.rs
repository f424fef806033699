//! Command handlers for idealtype CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod calculate;
pub mod configure;
pub mod rarity;
pub mod tables;
