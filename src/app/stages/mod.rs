pub mod prepare_artifacts;

pub use prepare_artifacts::PrepareArtifactsStage;
