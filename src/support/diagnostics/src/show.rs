use colored::ColoredString;
use report::Position;
use std::fmt::Write;

pub trait Show {
    fn show(&self, w: &mut dyn Write) -> std::fmt::Result;

    fn eprintln(&self) {
        let mut message = String::new();

        if self.show(&mut message).is_ok() {
            eprintln!("{message}");
        }
    }
}

/// `file:line: label message`, or just `label message` without a position.
pub(crate) fn show_labeled(
    w: &mut dyn Write,
    label: ColoredString,
    position: Option<&Position>,
    message: &str,
) -> std::fmt::Result {
    if let Some(position) = position {
        write!(w, "{position}: ")?;
    }

    write!(w, "{label} {message}")
}
