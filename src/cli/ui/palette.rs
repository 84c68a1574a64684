use colored::Colorize;

use crate::budget::BudgetStatus;

/// Maps a budget status onto how it looks on screen.
///
/// The classification itself lives in [`crate::budget::status`]; palettes only
/// decide colors and wording, so a different front end can swap them freely.
pub trait StatusPalette {
    fn paint(&self, status: BudgetStatus, text: &str) -> String;

    fn label(&self, status: BudgetStatus) -> &'static str {
        match status {
            BudgetStatus::Over => "Over budget",
            BudgetStatus::OnBudget => "On budget",
            BudgetStatus::NearLimit => "Near limit",
            BudgetStatus::Healthy => "Healthy",
            BudgetStatus::Undefined => "No budget",
        }
    }
}

/// ANSI colors: red when over, yellow near the limit, green when healthy,
/// gray when exactly spent or when there is no budget to measure against.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPalette;

impl StatusPalette for TerminalPalette {
    fn paint(&self, status: BudgetStatus, text: &str) -> String {
        match status {
            BudgetStatus::Over => text.red().bold().to_string(),
            BudgetStatus::OnBudget => text.bright_black().bold().to_string(),
            BudgetStatus::NearLimit => text.yellow().bold().to_string(),
            BudgetStatus::Healthy => text.green().bold().to_string(),
            BudgetStatus::Undefined => text.bright_black().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl StatusPalette for PlainPalette {
    fn paint(&self, _status: BudgetStatus, text: &str) -> String {
        text.to_string()
    }
}

pub fn palette_for(plain: bool) -> Box<dyn StatusPalette> {
    if plain {
        Box::new(PlainPalette)
    } else {
        Box::new(TerminalPalette)
    }
}
