//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for state shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::OnboardConfig;
use crate::controller::OnboardingService;
use crate::error::{OnboardError, Result};
use crate::progress::FileProgressStore;
use crate::subscription::{FileTierLookup, StaticTierLookup, TierLookup};
use crate::ui::UserInterface;

/// Exit code for invalid input (unknown flag, user or config).
pub const EXIT_USAGE: i32 = 2;

/// Exit code for transient failures worth retrying (`EX_TEMPFAIL`).
pub const EXIT_TEMPFAIL: i32 = 75;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Map an error to a process exit code.
pub fn exit_code_for(err: &OnboardError) -> i32 {
    match err {
        e if e.is_transient() => EXIT_TEMPFAIL,
        OnboardError::UnknownFlag { .. }
        | OnboardError::UserNotFound { .. }
        | OnboardError::UnknownTier { .. }
        | OnboardError::ConfigNotFound { .. }
        | OnboardError::ConfigParseError { .. }
        | OnboardError::ConfigValidationError { .. } => EXIT_USAGE,
        _ => 1,
    }
}

/// Service type the CLI runs against.
pub type CliService = OnboardingService<Box<dyn TierLookup>, FileProgressStore>;

/// Loaded configuration and resolved paths shared by commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Effective configuration.
    pub config: OnboardConfig,

    /// Root of progress records and the user table.
    pub data_dir: PathBuf,

    /// Print JSON instead of text.
    pub json: bool,
}

impl CommandContext {
    /// Create a context; `data_dir` overrides the configured directory.
    pub fn new(config: OnboardConfig, data_dir: Option<PathBuf>, json: bool) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| config.data_dir());
        Self {
            config,
            data_dir,
            json,
        }
    }

    /// Directory of per-user progress records.
    pub fn progress_dir(&self) -> PathBuf {
        self.data_dir.join("progress")
    }

    /// User → tier table.
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.yml")
    }

    /// Build the onboarding service, optionally pinning every user's tier.
    pub fn service(&self, tier_override: Option<&str>) -> Result<CliService> {
        let tiers: Box<dyn TierLookup> = match tier_override {
            Some(tier) => Box::new(StaticTierLookup::new(tier)),
            None => Box::new(FileTierLookup::new(self.users_file())),
        };
        let store = FileProgressStore::new(self.progress_dir());
        OnboardingService::from_config(tiers, store, &self.config)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Commands::View(args) => super::view::ViewCommand::new(ctx, args.clone()).execute(ui),
            Commands::Complete(args) => {
                super::complete::CompleteCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Reset(args) => super::reset::ResetCommand::new(ctx, args.clone()).execute(ui),
            Commands::Steps(args) => super::steps::StepsCommand::new(ctx, args.clone()).execute(ui),
            Commands::Tiers => super::tiers::TiersCommand::new(ctx).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
