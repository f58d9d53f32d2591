// Artifact output - writes finished variants into the output directory

use crate::dist::error::WriteError;
use std::path::{Path, PathBuf};

/// Write `content` to `output_dir/filename`, creating the directory if needed
///
/// Existing files are overwritten. Returns the path written and the number of
/// bytes on disk.
pub fn write(output_dir: &Path, filename: &str, content: &str) -> Result<(PathBuf, u64), WriteError> {
    std::fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(filename);
    std::fs::write(&path, content.as_bytes()).map_err(|source| WriteError::WriteFile {
        path: path.clone(),
        source,
    })?;

    let byte_size = content.len() as u64;
    tracing::debug!(path = %path.display(), bytes = byte_size, "wrote artifact");
    Ok((path, byte_size))
}

/// Format a byte count as kilobytes with two decimals
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
