pub mod blobs;
pub mod dirs;
pub mod files;
pub mod image_codec;
pub mod records;
pub mod stage_runner;

pub use crate::domain::ports::Stage;
pub use crate::utils::error::Result;
pub use blobs::{load_blob, save_blob};
pub use dirs::ensure_directories;
pub use files::file_size_kb;
pub use image_codec::{decode_image, encode_image};
pub use records::{load_record, load_record_as, save_record};
pub use stage_runner::StageRunner;
