use crate::config::config_box::ConfigBox;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Layout of `config/config.yaml`: where each stage keeps its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    pub artifacts_root: PathBuf,
    #[serde(default)]
    pub data_ingestion: Option<DataIngestionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataIngestionConfig {
    pub root_dir: PathBuf,
    #[serde(rename = "source_URL", alias = "source_url")]
    pub source_url: String,
    pub local_data_file: PathBuf,
    pub unzip_dir: PathBuf,
}

impl ArtifactsConfig {
    pub fn from_config_box(config: &ConfigBox) -> Result<Self> {
        config.deserialize()
    }

    /// Directories that must exist before any stage runs, in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.artifacts_root.clone()];
        if let Some(ingestion) = &self.data_ingestion {
            dirs.push(ingestion.root_dir.clone());
        }
        dirs
    }
}

impl Validate for ArtifactsConfig {
    fn validate(&self) -> Result<()> {
        validate_path("artifacts_root", &self.artifacts_root)?;

        if let Some(ingestion) = &self.data_ingestion {
            validate_path("data_ingestion.root_dir", &ingestion.root_dir)?;
            validate_url("data_ingestion.source_URL", &ingestion.source_url)?;
            validate_path("data_ingestion.local_data_file", &ingestion.local_data_file)?;
            validate_path("data_ingestion.unzip_dir", &ingestion.unzip_dir)?;
        }

        Ok(())
    }
}
