use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// Decodes a base64 image payload and writes the raw bytes to `path`,
/// replacing any existing file. Line breaks and other ASCII whitespace in
/// the payload are ignored. Nothing is written when decoding fails.
pub fn decode_image<P: AsRef<Path>>(encoded: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    validate_path("path", path)?;

    let bytes = if encoded.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD.decode(compact)?
    } else {
        STANDARD.decode(encoded)?
    };

    std::fs::write(path, &bytes).map_err(|e| ArtifactError::write_failure(path, e))?;
    tracing::info!("image decoded into: {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Reads the file at `path` and returns it as standard base64 text.
pub fn encode_image<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    validate_path("path", path)?;

    let bytes = std::fs::read(path).map_err(|e| ArtifactError::from_io(path, e))?;
    tracing::info!("image encoded from: {}", path.display());
    Ok(STANDARD.encode(bytes))
}
