//! View command implementation.
//!
//! `onboard view <user>` shows the user's effective steps and where they
//! are in them. A user seen for the first time gets a fresh record.

use crate::cli::args::ViewArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display;

/// The view command implementation.
pub struct ViewCommand {
    ctx: CommandContext,
    args: ViewArgs,
}

impl ViewCommand {
    /// Create a new view command.
    pub fn new(ctx: CommandContext, args: ViewArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ViewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let service = self.ctx.service(self.args.tier.as_deref())?;
        let snapshot = service.evaluate(&self.args.user)?;

        if self.ctx.json {
            display::print_json(ui, &snapshot.view)?;
            return Ok(CommandResult::success());
        }

        display::show_view(ui, &self.args.user, &snapshot);

        Ok(CommandResult::success())
    }
}
