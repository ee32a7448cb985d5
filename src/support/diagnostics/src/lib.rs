mod error;
mod show;
mod warning;

use core::fmt::Debug;
pub use error::ErrorDiagnostic;
use parking_lot::Mutex;
pub use show::Show;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show + Send + Sync {}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub warn_unchecked_records: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            warn_unchecked_records: true,
        }
    }
}

pub struct Diagnostics {
    diagnostics: Mutex<Vec<Box<dyn Diagnostic>>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            flags,
        }
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.lock().push(Box::new(diagnostic));
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collected diagnostics rendered as text, in the order they were pushed.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .iter()
            .map(|diagnostic| {
                let mut message = String::new();
                let _ = diagnostic.show(&mut message);
                message
            })
            .collect()
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        diagnostic.eprintln();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report::Position;

    fn collecting() -> Diagnostics {
        colored::control::set_override(false);

        Diagnostics::new(DiagnosticFlags {
            print_without_collecting: false,
            ..Default::default()
        })
    }

    #[test]
    fn collects_in_order() {
        let diagnostics = collecting();

        diagnostics.push(WarningDiagnostic::new(
            "Layout of 'Node' is not checkable",
            Position::new("node.go", 7),
        ));
        diagnostics.push(ErrorDiagnostic::plain("Unknown platform `bogus-arch`"));

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.messages(),
            [
                "node.go:7: warning: Layout of 'Node' is not checkable",
                "error: Unknown platform `bogus-arch`",
            ]
        );
    }

    #[test]
    fn printing_skips_collection() {
        let diagnostics = Diagnostics::new(DiagnosticFlags::default());
        diagnostics.push(WarningDiagnostic::plain("printed right away"));
        assert!(diagnostics.is_empty());
    }
}
