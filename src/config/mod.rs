pub mod artifacts;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config_box;
pub mod loader;

pub use artifacts::{ArtifactsConfig, DataIngestionConfig};
#[cfg(feature = "cli")]
pub use cli::{DriverArgs, LogFormat};
pub use config_box::ConfigBox;
pub use loader::{read_config, ConfigFormat, ConfigLoader};
