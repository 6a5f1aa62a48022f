//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OnboardTheme, OutputMode, StepMark, UserInterface};

/// Terminal UI writing to stdout (errors to stderr).
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: OnboardTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            OnboardTheme::new()
        } else {
            OnboardTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_step(&mut self, position: usize, label: &str, mark: StepMark) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_step(position, label, mark)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}
