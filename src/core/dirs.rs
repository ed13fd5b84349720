use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use std::fs;
use std::path::Path;

/// Creates every directory in `paths`, parents included, in order.
///
/// Directories that already exist are fine. With `verbose` set, every
/// requested path is logged whether or not it had to be created.
pub fn ensure_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        validate_path("path", path)?;

        fs::create_dir_all(path).map_err(|e| ArtifactError::write_failure(path, e))?;
        if verbose {
            tracing::info!("created directory at: {}", path.display());
        }
    }
    Ok(())
}
