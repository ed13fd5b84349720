use crate::config::ConfigBox;
use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes `data` as 4-space indented JSON, replacing any existing file.
///
/// `data` has to serialize to a JSON object (metrics, scores, params).
pub fn save_record<P, T>(path: P, data: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    validate_path("path", path)?;

    let value = serde_json::to_value(data).map_err(|e| ArtifactError::SerializationError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(ArtifactError::SerializationError {
            path: path.to_path_buf(),
            message: "record must serialize to a JSON object".to_string(),
        });
    }

    let file = File::create(path).map_err(|e| ArtifactError::write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|e| ArtifactError::write_failure(path, std::io::Error::from(e)))?;
    writer.flush().map_err(|e| ArtifactError::write_failure(path, e))?;

    tracing::info!("json file saved at: {}", path.display());
    Ok(())
}

/// Reads a JSON record into a [`ConfigBox`].
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<ConfigBox> {
    let path = path.as_ref();
    let value: serde_json::Value = read_json(path)?;

    let record = ConfigBox::from_value(value).map_err(|_| ArtifactError::ParseError {
        path: path.to_path_buf(),
        format: "json",
        message: "record must be a JSON object".to_string(),
    })?;

    tracing::info!("json file loaded successfully from: {}", path.display());
    Ok(record)
}

/// Reads a JSON record straight into a typed value.
pub fn load_record_as<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let record = read_json(path)?;
    tracing::info!("json file loaded successfully from: {}", path.display());
    Ok(record)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    validate_path("path", path)?;
    let file = File::open(path).map_err(|e| ArtifactError::from_io(path, e))?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            ArtifactError::from_io(path, std::io::Error::from(e))
        } else {
            ArtifactError::ParseError {
                path: path.to_path_buf(),
                format: "json",
                message: e.to_string(),
            }
        }
    })
}
