use crate::config::{read_config, ArtifactsConfig, ConfigLoader};
use crate::core::{ensure_directories, save_record, Stage};
use crate::utils::validation::Validate;
use anyhow::Context;
use std::path::PathBuf;

pub const STAGE_NAME: &str = "Prepare Artifacts stage";
pub const PARAMS_SNAPSHOT: &str = "params.json";

/// Loads the pipeline config, provisions the artifact directories and
/// snapshots the training params as JSON for the stages that follow.
pub struct PrepareArtifactsStage {
    config_path: PathBuf,
    params_path: Option<PathBuf>,
    verbose: bool,
}

impl PrepareArtifactsStage {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            params_path: None,
            verbose: true,
        }
    }

    /// Params file to snapshot; a missing file is skipped with a warning.
    pub fn with_params(mut self, params_path: impl Into<PathBuf>) -> Self {
        self.params_path = Some(params_path.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn load_layout(&self) -> anyhow::Result<ArtifactsConfig> {
        let config = ConfigLoader::new()
            .with_env_substitution(true)
            .load(&self.config_path)
            .with_context(|| format!("loading config {}", self.config_path.display()))?;

        let layout = ArtifactsConfig::from_config_box(&config)?;
        layout.validate()?;
        Ok(layout)
    }
}

impl Stage for PrepareArtifactsStage {
    fn name(&self) -> &str {
        STAGE_NAME
    }

    fn run(&self) -> anyhow::Result<()> {
        let layout = self.load_layout()?;
        ensure_directories(layout.directories(), self.verbose)?;

        let Some(params_path) = &self.params_path else {
            return Ok(());
        };
        if !params_path.exists() {
            tracing::warn!("params file {} not found, skipping snapshot", params_path.display());
            return Ok(());
        }

        let params = read_config(params_path)
            .with_context(|| format!("loading params {}", params_path.display()))?;
        save_record(layout.artifacts_root.join(PARAMS_SNAPSHOT), &params)?;
        Ok(())
    }
}
