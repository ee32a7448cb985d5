use crate::{
    Diagnostic,
    show::{Show, show_labeled},
};
use colored::Colorize;
use report::Position;

#[derive(Debug)]
pub struct WarningDiagnostic {
    message: String,
    position: Option<Position>,
}

impl WarningDiagnostic {
    pub fn new(message: impl ToString, position: Position) -> Self {
        Self {
            message: message.to_string(),
            position: Some(position),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            position: None,
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        show_labeled(w, "warning:".yellow().bold(), self.position.as_ref(), &self.message)
    }
}

impl Diagnostic for WarningDiagnostic {}
