use anyhow::Result;
use chicken_classifier::{
    ensure_directories, load_blob, load_record, read_config, save_blob, save_record,
    ArtifactError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_nested_yaml_key_and_attribute_access() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "model:\n  epochs: 5\n  lr: 0.01\n")?;

    let cfg = read_config(&path)?;

    assert_eq!(cfg["model"]["epochs"], json!(5));
    assert_eq!(cfg.lookup("model.epochs"), Some(&json!(5)));
    assert_eq!(cfg.section("model")?.value::<i64>("epochs")?, 5);
    assert_eq!(cfg.value::<f64>("model.lr")?, 0.01);
    Ok(())
}

#[test]
fn test_yaml_document_is_preserved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("params.yaml");
    std::fs::write(
        &path,
        r#"
# training params
AUGMENTATION: True
IMAGE_SIZE: [224, 224, 3]
BATCH_SIZE: 16
INCLUDE_TOP: false
EPOCHS: 1
CLASSES: 2
WEIGHTS: imagenet
LEARNING_RATE: 0.01
NOTES: null
"#,
    )?;

    let cfg = read_config(&path)?;
    let expected = json!({
        "AUGMENTATION": true,
        "IMAGE_SIZE": [224, 224, 3],
        "BATCH_SIZE": 16,
        "INCLUDE_TOP": false,
        "EPOCHS": 1,
        "CLASSES": 2,
        "WEIGHTS": "imagenet",
        "LEARNING_RATE": 0.01,
        "NOTES": null
    });

    assert_eq!(cfg, expected);
    for key in cfg.keys() {
        assert_eq!(&cfg[key.as_str()], cfg.lookup(key).unwrap());
    }
    Ok(())
}

#[test]
fn test_empty_config_never_returns_a_value() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.yaml");
    std::fs::write(&path, "")?;

    assert!(matches!(
        read_config(&path),
        Err(ArtifactError::EmptyConfigError { .. })
    ));
    Ok(())
}

#[test]
fn test_record_roundtrip_with_nesting_and_unicode() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scores.json");
    let record = json!({
        "loss": 0.4123,
        "accuracy": 0.87,
        "classes": ["Coccidiosis", "Healthy"],
        "confusion": {"tp": 40, "fp": 3, "nested": [{"a": [1, 2, {"b": null}]}]},
        "notes": "poulet malade 🐔, 病雞",
        "zeta_first": true,
        "alpha_second": false
    });

    save_record(&path, &record)?;
    let loaded = load_record(&path)?;

    assert_eq!(loaded, record);
    let keys: Vec<&str> = loaded.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["loss", "accuracy", "classes", "confusion", "notes", "zeta_first", "alpha_second"]
    );
    Ok(())
}

#[test]
fn test_invalid_record_is_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scores.json");
    std::fs::write(&path, "{loss: 0.4}")?;

    assert!(matches!(
        load_record(&path),
        Err(ArtifactError::ParseError { .. })
    ));
    Ok(())
}

#[test]
fn test_ensure_directories_twice() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dirs = vec![
        temp_dir.path().join("artifacts"),
        temp_dir.path().join("artifacts/prepare_base_model"),
        temp_dir.path().join("artifacts/training/logs"),
    ];

    ensure_directories(&dirs, true)?;
    for dir in &dirs {
        assert!(dir.is_dir());
    }

    ensure_directories(&dirs, true)?;
    for dir in &dirs {
        assert!(dir.is_dir());
    }
    Ok(())
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TrainedModel {
    name: String,
    weights: Vec<f32>,
    epoch: u32,
}

#[test]
fn test_blob_roundtrip_and_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("model.bin");
    let model = TrainedModel {
        name: "vgg16-head".to_string(),
        weights: vec![0.5, -1.25, 3.0],
        epoch: 1,
    };

    save_blob(&path, &model)?;
    let loaded: TrainedModel = load_blob(&path)?;
    assert_eq!(loaded, model);

    let missing: chicken_classifier::Result<TrainedModel> =
        load_blob(temp_dir.path().join("absent.bin"));
    assert!(matches!(missing, Err(ArtifactError::NotFoundError { .. })));
    Ok(())
}
