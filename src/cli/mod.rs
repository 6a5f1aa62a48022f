//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompleteArgs, CompletionsArgs, ResetArgs, StepsArgs, ViewArgs,
};
pub use commands::{
    exit_code_for, Command, CommandContext, CommandDispatcher, CommandResult, EXIT_TEMPFAIL,
    EXIT_USAGE,
};
