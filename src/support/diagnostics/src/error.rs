use crate::{
    Diagnostic,
    show::{Show, show_labeled},
};
use colored::Colorize;
use report::Position;

/// A failure that ends the run.
#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    position: Option<Position>,
}

impl ErrorDiagnostic {
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

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        show_labeled(w, "error:".red().bold(), self.position.as_ref(), &self.message)
    }
}

impl Diagnostic for ErrorDiagnostic {}
