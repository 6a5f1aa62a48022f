//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Onboard - tier-aware onboarding progress for members.
#[derive(Debug, Parser)]
#[command(name = "onboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .onboard/config.yml discovery)
    #[arg(short, long, global = true, env = "ONBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding progress records and users.yml
    #[arg(long, global = true, env = "ONBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a user's current onboarding step
    View(ViewArgs),

    /// Mark a milestone done for a user
    Complete(CompleteArgs),

    /// Clear all onboarding progress for a user
    Reset(ResetArgs),

    /// List the steps a tier goes through
    Steps(StepsArgs),

    /// List subscription tiers and what they unlock
    Tiers,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `view` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    /// User id
    pub user: String,

    /// Use this tier instead of looking the user up in users.yml
    #[arg(long)]
    pub tier: Option<String>,
}

/// Arguments for the `complete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompleteArgs {
    /// User id
    pub user: String,

    /// Milestone flag (e.g. goal_set)
    pub flag: String,

    /// Use this tier instead of looking the user up in users.yml
    #[arg(long)]
    pub tier: Option<String>,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResetArgs {
    /// User id
    pub user: String,

    /// Confirm the reset; nothing is changed without it
    #[arg(long)]
    pub yes: bool,

    /// Use this tier instead of looking the user up in users.yml
    #[arg(long)]
    pub tier: Option<String>,
}

/// Arguments for the `steps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StepsArgs {
    /// Show only the steps this tier sees
    #[arg(long)]
    pub tier: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
