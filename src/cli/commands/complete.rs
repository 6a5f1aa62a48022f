//! Complete command implementation.
//!
//! `onboard complete <user> <flag>` marks a milestone done.

use crate::cli::args::CompleteArgs;
use crate::error::{OnboardError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_USAGE};
use super::display;

/// The complete command implementation.
pub struct CompleteCommand {
    ctx: CommandContext,
    args: CompleteArgs,
}

impl CompleteCommand {
    /// Create a new complete command.
    pub fn new(ctx: CommandContext, args: CompleteArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for CompleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let service = self.ctx.service(self.args.tier.as_deref())?;

        let snapshot = match service.complete(&self.args.user, &self.args.flag) {
            Ok(snapshot) => snapshot,
            Err(OnboardError::UnknownFlag { flag }) => {
                let known: Vec<&str> = service.catalog().milestones().collect();
                ui.error(&format!("Unknown milestone '{}'", flag));
                ui.message(&format!("Known milestones: {}", known.join(", ")));
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
            Err(e) => return Err(e),
        };

        if self.ctx.json {
            display::print_json(ui, &snapshot.view)?;
            return Ok(CommandResult::success());
        }

        ui.success(&format!("Marked {} for {}", self.args.flag, self.args.user));
        display::show_view(ui, &self.args.user, &snapshot);

        Ok(CommandResult::success())
    }
}
