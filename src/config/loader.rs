use crate::config::config_box::ConfigBox;
use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::validate_path;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.toml` and `.json` pick their format, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Non-finite floats (`.inf`, `nan`) have no JSON form and are rejected
    /// rather than turned into `null`.
    fn parse(self, content: &str) -> std::result::Result<Value, String> {
        match self {
            ConfigFormat::Yaml => {
                let raw: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| e.to_string())?;
                if yaml_has_non_finite(&raw) {
                    return Err(NON_FINITE.to_string());
                }
                serde_json::to_value(raw).map_err(|e| e.to_string())
            }
            ConfigFormat::Toml => {
                let raw: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                if raw.values().any(toml_has_non_finite) {
                    return Err(NON_FINITE.to_string());
                }
                serde_json::to_value(raw).map_err(|e| e.to_string())
            }
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

const NON_FINITE: &str = "infinite or NaN numbers are not supported";

fn yaml_has_non_finite(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Number(n) => n.as_f64().is_some_and(|f| !f.is_finite()),
        serde_yaml::Value::Sequence(items) => items.iter().any(yaml_has_non_finite),
        serde_yaml::Value::Mapping(map) => map
            .iter()
            .any(|(k, v)| yaml_has_non_finite(k) || yaml_has_non_finite(v)),
        serde_yaml::Value::Tagged(tagged) => yaml_has_non_finite(&tagged.value),
        _ => false,
    }
}

fn toml_has_non_finite(value: &toml::Value) -> bool {
    match value {
        toml::Value::Float(f) => !f.is_finite(),
        toml::Value::Array(items) => items.iter().any(toml_has_non_finite),
        toml::Value::Table(table) => table.values().any(toml_has_non_finite),
        _ => false,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    format: Option<ConfigFormat>,
    substitute_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the file extension and parse as `format`.
    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Replace `${VAR}` with the environment value before parsing.
    /// Unset variables are left as written.
    pub fn with_env_substitution(mut self, enabled: bool) -> Self {
        self.substitute_env = enabled;
        self
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ConfigBox> {
        let path = path.as_ref();
        validate_path("path", path)?;

        let format = self.format.unwrap_or_else(|| ConfigFormat::from_path(path));
        let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::from_io(path, e))?;
        let content = if self.substitute_env {
            substitute_env_vars(&raw, path)?
        } else {
            raw
        };

        if is_blank_document(&content) {
            return Err(ArtifactError::EmptyConfigError {
                path: path.to_path_buf(),
            });
        }

        let parsed = format
            .parse(&content)
            .map_err(|message| ArtifactError::ParseError {
                path: path.to_path_buf(),
                format: format.name(),
                message,
            })?;

        let config = match ConfigBox::from_value(parsed) {
            Ok(config) if !config.is_empty() => config,
            Ok(_) | Err(Value::Null) => {
                return Err(ArtifactError::EmptyConfigError {
                    path: path.to_path_buf(),
                })
            }
            Err(other) => {
                return Err(ArtifactError::ParseError {
                    path: path.to_path_buf(),
                    format: format.name(),
                    message: format!("top-level value must be a mapping, got {}", kind_of(&other)),
                })
            }
        };

        tracing::info!("{} file: {} loaded successfully", format.name(), path.display());
        Ok(config)
    }
}

/// Loads a config file with default settings.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ConfigBox> {
    ConfigLoader::default().load(path)
}

fn substitute_env_vars(content: &str, path: &Path) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ArtifactError::ParseError {
        path: path.to_path_buf(),
        format: "env substitution",
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

// 只有空白、註解或文件分隔符號
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
