//! Visual theme and styling.

use console::Style;

use super::StepMark;

/// Terminal theme.
#[derive(Debug, Clone)]
pub struct OnboardTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the current step (magenta bold).
    pub current: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for OnboardTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            current: Style::new().magenta().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            current: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format one line of a step list.
    pub fn format_step(&self, position: usize, label: &str, mark: StepMark) -> String {
        match mark {
            StepMark::Done => format!(
                "  {} {}",
                self.success.apply_to("✓"),
                self.dim.apply_to(format!("{}. {}", position, label))
            ),
            StepMark::Current => format!(
                "  {} {}",
                self.current.apply_to("▸"),
                self.current.apply_to(format!("{}. {}", position, label))
            ),
            StepMark::Pending => format!("  {} {}. {}", self.dim.apply_to("○"), position, label),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = OnboardTheme::plain().format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = OnboardTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn step_marks_render_differently() {
        let theme = OnboardTheme::plain();
        assert_eq!(theme.format_step(1, "Welcome", StepMark::Done), "  ✓ 1. Welcome");
        assert_eq!(theme.format_step(2, "Goal", StepMark::Current), "  ▸ 2. Goal");
        assert_eq!(theme.format_step(3, "Challenge", StepMark::Pending), "  ○ 3. Challenge");
    }
}
