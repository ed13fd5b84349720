use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use std::path::Path;

/// Human readable size of a file, e.g. `"~ 12 KB"`.
pub fn file_size_kb<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    validate_path("path", path)?;

    let bytes = std::fs::metadata(path)
        .map_err(|e| ArtifactError::from_io(path, e))?
        .len();
    let kb = (bytes as f64 / 1024.0).round_ties_even() as u64;
    tracing::info!("file size of {}: ~ {} KB", path.display(), kb);
    Ok(format!("~ {} KB", kb))
}
