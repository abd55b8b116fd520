//! Output module writing.

use std::path::Path;

use crate::error::ConvertError;

/// Write the rendered module, creating or truncating `path`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// [`ConvertError::OutputWriteFailure`] when the file cannot be created or
/// written, for example a missing parent directory or a read-only target.
pub fn write_module(path: &Path, contents: &str) -> Result<usize, ConvertError> {
    std::fs::write(path, contents).map_err(|source| ConvertError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote module");
    Ok(contents.len())
}
