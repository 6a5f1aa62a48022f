//! Reset command implementation.
//!
//! `onboard reset <user> --yes` clears every onboarding flag. Without
//! `--yes` nothing is changed.

use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_USAGE};
use super::display;

/// The reset command implementation.
pub struct ResetCommand {
    ctx: CommandContext,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(ctx: CommandContext, args: ResetArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.yes {
            ui.error(&format!(
                "Refusing to reset onboarding for '{}' without --yes",
                self.args.user
            ));
            return Ok(CommandResult::failure(EXIT_USAGE));
        }

        let service = self.ctx.service(self.args.tier.as_deref())?;
        let snapshot = service.reset(&self.args.user)?;

        if self.ctx.json {
            display::print_json(ui, &snapshot.view)?;
            return Ok(CommandResult::success());
        }

        ui.warning(&format!("Onboarding reset for {}", self.args.user));
        display::show_view(ui, &self.args.user, &snapshot);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OnboardConfig;
    use crate::progress::ProgressStore;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> CommandContext {
        CommandContext::new(OnboardConfig::default(), Some(temp.path().to_path_buf()), false)
    }

    fn args(yes: bool) -> ResetArgs {
        ResetArgs {
            user: "alice".to_string(),
            yes,
            tier: Some("premium".to_string()),
        }
    }

    #[test]
    fn reset_requires_confirmation() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        ctx.service(Some("premium"))
            .unwrap()
            .complete_milestone("alice", "welcome_shown")
            .unwrap();
        let mut ui = MockUI::new();

        let result = ResetCommand::new(ctx.clone(), args(false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, EXIT_USAGE);
        let service = ctx.service(Some("premium")).unwrap();
        assert!(service.store().get("alice").unwrap().unwrap().is_set("welcome_shown"));
    }

    #[test]
    fn reset_clears_progress() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let service = ctx.service(Some("premium")).unwrap();
        service.complete_milestone("alice", "welcome_shown").unwrap();
        service.complete_milestone("alice", "goal_set").unwrap();
        let mut ui = MockUI::new();

        let result = ResetCommand::new(ctx, args(true)).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("reset"));
        assert!(ui.has_message("Step 1 of 6: Welcome"));
        let stored = service.store().get("alice").unwrap().unwrap();
        assert_eq!(stored.done_count(), 0);
    }
}
