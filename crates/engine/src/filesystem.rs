use std::path::Path;

use crate::error::{EngineError, Result};

/// Read a putr log fully into memory and split it into lines.
///
/// The log is bounded (one validator run), so there is no streaming; the
/// whole file is loaded at once.
///
/// # Errors
///
/// Returns `EngineError::FileRead` when the file is missing or unreadable.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}
