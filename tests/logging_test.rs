use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chicken_classifier::{
    decode_image, encode_image, ensure_directories, file_size_kb, read_config, save_record,
};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_verbose_directory_creation_logs_every_path() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("artifacts");
    let fresh = temp_dir.path().join("artifacts/evaluation");
    std::fs::create_dir_all(&existing).unwrap();

    let output = with_captured_logs(|| {
        ensure_directories([&existing, &fresh], true).unwrap();
    });

    assert_eq!(output.matches("created directory at:").count(), 2);
    assert!(output.contains(&existing.display().to_string()));
}

#[test]
fn test_quiet_directory_creation_logs_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = with_captured_logs(|| {
        ensure_directories([temp_dir.path().join("quiet")], false).unwrap();
    });

    assert!(!output.contains("created directory at:"));
}

#[test]
fn test_successful_loads_and_saves_are_logged() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(&config, "artifacts_root: artifacts\n").unwrap();
    let scores = temp_dir.path().join("scores.json");

    let output = with_captured_logs(|| {
        read_config(&config).unwrap();
        save_record(&scores, &json!({"loss": 0.1})).unwrap();
    });

    assert!(output.contains("yaml file:"));
    assert!(output.contains("loaded successfully"));
    assert!(output.contains("json file saved at:"));
}

#[test]
fn test_image_codec_and_size_helper_are_logged() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("inputImage.jpg");

    let output = with_captured_logs(|| {
        decode_image(&STANDARD.encode(b"fake jpeg bytes"), &image).unwrap();
        encode_image(&image).unwrap();
        file_size_kb(&image).unwrap();
    });

    assert_eq!(output.matches(" INFO ").count(), 3);
    assert!(output.contains("image decoded into:"));
    assert!(output.contains("image encoded from:"));
    assert!(output.contains("file size of"));
}
