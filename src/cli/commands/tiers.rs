//! Tiers command implementation.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display;

/// Lists subscription tiers and the capabilities they grant.
pub struct TiersCommand {
    ctx: CommandContext,
}

impl TiersCommand {
    /// Create a new tiers command.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for TiersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let access = self.ctx.config.access_resolver()?;

        if self.ctx.json {
            let table: BTreeMap<&str, Vec<&str>> = access
                .tiers()
                .map(|(tier, caps)| (tier, caps.tags().collect()))
                .collect();
            display::print_json(ui, &table)?;
            return Ok(CommandResult::success());
        }

        ui.show_header("Tiers");
        for (tier, caps) in access.tiers() {
            let tags: Vec<&str> = caps.tags().collect();
            let unlocks = if tags.is_empty() {
                "-".to_string()
            } else {
                tags.join(", ")
            };
            let marker = if tier == access.fallback_tier() {
                " (fallback)"
            } else {
                ""
            };
            ui.message(&format!("  {}{}: {}", tier, marker, unlocks));
        }

        Ok(CommandResult::success())
    }
}
