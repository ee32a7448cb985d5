mod analyze;
mod check;
mod error;
mod help;
mod options;
mod render;
mod version;
mod view;

pub use analyze::{Analysis, analyze};
use check::CheckCommand;
use derive_more::IsVariant;
use enum_dispatch::enum_dispatch;
pub use error::CliError;
use help::HelpCommand;
pub use options::RunOptions;
use std::process::ExitCode;
use version::VersionCommand;
use view::ViewCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Version(VersionCommand),
    Check(CheckCommand),
    View(ViewCommand),
}

impl Command {
    /// Options may appear anywhere, the first positional argument names the command
    /// and the remaining ones are input files.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let mut options = RunOptions::default();
        let mut command = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(HelpCommand.into()),
                "-v" | "--version" => return Ok(VersionCommand.into()),
                "-a" | "--arch" => options.arch = Some(value_of(&arg, &mut args)?),
                "-s" | "--struct" => options.record_name = Some(value_of(&arg, &mut args)?),
                "-d" | "--detailed" => options.detailed = true,
                "-nc" | "--no-color" => options.color = false,
                "--json" => options.json = true,
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(CliError::UnknownOption(arg));
                }
                _ if command.is_none() => command = Some(arg),
                _ => options.inputs.push(arg.into()),
            }
        }

        let Some(command) = command else {
            return Ok(HelpCommand.into());
        };

        match command.as_str() {
            "check" | "c" => Ok(CheckCommand { options }.into()),
            "view" | "v" => Ok(ViewCommand { options }.into()),
            _ => Err(CliError::UnknownCommand(command)),
        }
    }
}

fn value_of(option: &str, args: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(option.into()))
}

/// How a successful run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum Outcome {
    Success,
    ProblemsFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::ProblemsFound => ExitCode::from(1),
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<Outcome, CliError>;
}
