//! CLI module
//!
//! # Commands
//!
//! - `check` - Verify the configured credentials against the Sell API
//! - `discover` - Build and print the merged custom-field schema

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
