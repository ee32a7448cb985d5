mod logger;

use cli::{Command, Invoke};
use diagnostics::{ErrorDiagnostic, Show};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_logging();

    match Command::parse(std::env::args().skip(1)).and_then(Command::invoke) {
        Ok(outcome) => outcome.into(),
        Err(error) => {
            ErrorDiagnostic::plain(error).eprintln();
            ExitCode::FAILURE
        }
    }
}
