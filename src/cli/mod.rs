//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, DisplayArgs};
pub use commands::{
    benchmark, capture, execute, handle_config_action, info, list, CommandResult, Settings,
};
pub use enums::{CharsetChoice, ColorChoice};
