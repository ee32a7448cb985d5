use crate::{InputDocument, InputError};
use std::path::{Path, PathBuf};
use target_layout::TypeShape;

/// Reads and concatenates every input document.
pub fn load_documents(paths: &[PathBuf]) -> Result<InputDocument<TypeShape>, InputError> {
    if paths.is_empty() {
        return Err(InputError::NoInputPaths);
    }

    paths.iter().map(|path| load_document(path)).collect()
}

fn load_document(path: &Path) -> Result<InputDocument<TypeShape>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.into(),
        source,
    })?;

    let document: InputDocument<TypeShape> =
        serde_json::from_str(&content).map_err(|source| InputError::InvalidInput {
            path: path.into(),
            source,
        })?;

    tracing::debug!(
        "loaded {} records from {}",
        document.record_count(),
        path.display()
    );

    Ok(document)
}
