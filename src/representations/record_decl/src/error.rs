use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input paths given")]
    NoInputPaths,
    #[error("Failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid input in `{}`: {source}", path.display())]
    InvalidInput {
        path: PathBuf,
        source: serde_json::Error,
    },
}
