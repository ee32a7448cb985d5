use record_decl::InputError;
use target::TargetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command `{0}`, expected `check` or `view`")]
    UnknownCommand(String),
    #[error("Unknown option `{0}`")]
    UnknownOption(String),
    #[error("Option `{0}` expects a value")]
    MissingValue(String),
    #[error("Can't find record with name `{0}`")]
    RecordNotFound(String),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to render output")]
    Render(#[from] std::fmt::Error),
}
