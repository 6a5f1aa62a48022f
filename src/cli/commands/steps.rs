//! Steps command implementation.
//!
//! `onboard steps` lists the full catalog with access tags.
//! `onboard steps --tier premium` lists the steps that tier goes through,
//! numbered the way users see them.

use serde::Serialize;

use crate::cli::args::StepsArgs;
use crate::error::Result;
use crate::sequencer::effective_steps;
use crate::ui::{StepMark, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display;

/// The steps command implementation.
pub struct StepsCommand {
    ctx: CommandContext,
    args: StepsArgs,
}

#[derive(Serialize)]
struct StepRow<'a> {
    position: usize,
    id: u32,
    label: &'a str,
    milestone: &'a str,
    requires: Option<&'a str>,
}

impl StepsCommand {
    /// Create a new steps command.
    pub fn new(ctx: CommandContext, args: StepsArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for StepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.ctx.config.catalog()?;
        let access = self.ctx.config.access_resolver()?;

        let steps = match &self.args.tier {
            Some(tier) => effective_steps(catalog.steps(), &access.resolve_or_restrict(tier)),
            None => catalog.steps().to_vec(),
        };

        if self.ctx.json {
            let rows: Vec<StepRow<'_>> = steps
                .iter()
                .enumerate()
                .map(|(i, s)| StepRow {
                    position: i + 1,
                    id: s.id,
                    label: &s.label,
                    milestone: &s.milestone,
                    requires: s.access_tag.as_deref(),
                })
                .collect();
            display::print_json(ui, &rows)?;
            return Ok(CommandResult::success());
        }

        match &self.args.tier {
            Some(tier) => ui.show_header(&format!("Steps for {}", tier)),
            None => ui.show_header("Steps"),
        }

        for (index, step) in steps.iter().enumerate() {
            let label = match &step.access_tag {
                Some(tag) if self.args.tier.is_none() => {
                    format!("{} ({}, requires {})", step.label, step.milestone, tag)
                }
                _ => format!("{} ({})", step.label, step.milestone),
            };
            ui.show_step(index + 1, &label, StepMark::Pending);
        }

        if steps.is_empty() {
            ui.message("No steps");
        }

        Ok(CommandResult::success())
    }
}
