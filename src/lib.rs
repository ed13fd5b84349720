pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::DriverArgs;

pub use app::stages::PrepareArtifactsStage;
pub use config::{read_config, ConfigBox, ConfigFormat, ConfigLoader};
pub use core::{
    decode_image, encode_image, ensure_directories, file_size_kb, load_blob, load_record,
    load_record_as, save_blob, save_record, Stage, StageRunner,
};
pub use utils::error::{ArtifactError, Result};
