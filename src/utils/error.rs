use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("File not found: {}", path.display())]
    NotFoundError { path: PathBuf },

    #[error("Failed to parse {format} file {}: {message}", path.display())]
    ParseError {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Config file is empty: {}", path.display())]
    EmptyConfigError { path: PathBuf },

    #[error("IO error at {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error for {}: {message}", path.display())]
    SerializationError { path: PathBuf, message: String },

    #[error("Deserialization error for {}: {message}", path.display())]
    DeserializationError { path: PathBuf, message: String },

    #[error("Base64 decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ArtifactError>;

impl ArtifactError {
    /// Maps an IO error on `path` to `NotFoundError` or `IoError`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::NotFoundError { path }
        } else {
            ArtifactError::IoError { path, source }
        }
    }

    /// Same as [`ArtifactError::from_io`] but never reports `NotFoundError`.
    /// Used on write paths, where a missing parent directory is a write failure.
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArtifactError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ArtifactError::NotFoundError { path } => {
                format!("Could not find '{}'", path.display())
            }
            ArtifactError::ParseError { path, format, .. } => {
                format!("'{}' is not valid {}", path.display(), format)
            }
            ArtifactError::EmptyConfigError { path } => {
                format!("Config file '{}' has no content", path.display())
            }
            ArtifactError::IoError { path, .. } => {
                format!("Could not write or access '{}'", path.display())
            }
            ArtifactError::SerializationError { path, .. } => {
                format!("Could not serialize data for '{}'", path.display())
            }
            ArtifactError::DeserializationError { path, .. } => {
                format!("Could not read stored object from '{}'", path.display())
            }
            ArtifactError::DecodeError(_) => "Image payload is not valid base64".to_string(),
            ArtifactError::InvalidConfigValueError { field, .. } => {
                format!("Configuration field '{}' has an invalid value", field)
            }
            ArtifactError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ArtifactError::NotFoundError { .. } => {
                "Check the path, or run the stage that produces this file first"
            }
            ArtifactError::ParseError { .. } => "Fix the syntax error reported above",
            ArtifactError::EmptyConfigError { .. } => "Add at least one key to the config file",
            ArtifactError::IoError { .. } => {
                "Check permissions, free disk space and that no path component is a regular file"
            }
            ArtifactError::SerializationError { .. } => {
                "Make sure the value only contains serializable data"
            }
            ArtifactError::DeserializationError { .. } => {
                "The file is corrupt or was written by an incompatible version; regenerate it"
            }
            ArtifactError::DecodeError(_) => "Send the image as standard base64 with padding",
            ArtifactError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file"
            }
            ArtifactError::MissingConfigError { .. } => "Add the missing field to the config file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_not_found() {
        let err = ArtifactError::from_io(
            "missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ArtifactError::NotFoundError { .. }));

        let err = ArtifactError::from_io(
            "locked.yaml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ArtifactError::IoError { .. }));
    }

    #[test]
    fn test_write_failure_is_always_io() {
        let err = ArtifactError::write_failure(
            "nested/out.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no parent"),
        );
        assert!(matches!(err, ArtifactError::IoError { .. }));
        assert!(err.to_string().contains("nested/out.json"));
    }
}
