//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`] and share a [`CommandContext`].

pub mod complete;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod reset;
pub mod steps;
pub mod tiers;
pub mod view;

pub use dispatcher::{
    exit_code_for, CliService, Command, CommandContext, CommandDispatcher, CommandResult,
    EXIT_TEMPFAIL, EXIT_USAGE,
};
