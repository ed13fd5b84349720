use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Persists any serializable value (fitted encoders, label maps, model
/// state) as a bincode blob. No schema or version tag is written; the
/// reader must ask for the same type the writer stored.
pub fn save_blob<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    validate_path("path", path)?;

    // Encode first so an unserializable value leaves any existing file alone.
    let bytes = bincode::serialize(value).map_err(|e| match *e {
        bincode::ErrorKind::Io(source) => ArtifactError::write_failure(path, source),
        other => ArtifactError::SerializationError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    let file = File::create(path).map_err(|e| ArtifactError::write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ArtifactError::write_failure(path, e))?;

    tracing::info!("binary file saved at: {}", path.display());
    Ok(())
}

pub fn load_blob<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    validate_path("path", path)?;

    // Decoding from a slice bounds every length prefix by the bytes on disk.
    let bytes = std::fs::read(path).map_err(|e| ArtifactError::from_io(path, e))?;
    let value = bincode::deserialize(&bytes).map_err(|e| ArtifactError::DeserializationError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!("binary file loaded from: {}", path.display());
    Ok(value)
}
