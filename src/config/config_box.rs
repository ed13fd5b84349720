use crate::utils::error::{ArtifactError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::ops::Index;

static NULL: Value = Value::Null;

/// Immutable, string-keyed view over a parsed config or record document.
///
/// Values are reachable by key (`cfg["model"]["epochs"]`, [`ConfigBox::get`])
/// or by name path (`cfg.lookup("model.epochs")`, [`ConfigBox::section`],
/// [`ConfigBox::value`]). Both routes return the same underlying value.
/// Key order follows the source document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigBox {
    inner: Map<String, Value>,
}

impl ConfigBox {
    pub fn new(inner: Map<String, Value>) -> Self {
        Self { inner }
    }

    /// Wraps a parsed document; anything other than an object is handed back.
    pub fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Object(inner) => Ok(Self { inner }),
            other => Err(other),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Resolves a dot-separated name path. Numeric segments index sequences,
    /// so `layers.0.units` reaches into the first element of `layers`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.inner.get(first)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Nested mapping at `path` as its own `ConfigBox`.
    pub fn section(&self, path: &str) -> Result<ConfigBox> {
        match self.lookup(path) {
            Some(Value::Object(map)) => Ok(ConfigBox::new(map.clone())),
            Some(other) => Err(ArtifactError::InvalidConfigValueError {
                field: path.to_string(),
                value: other.to_string(),
                reason: "expected a mapping".to_string(),
            }),
            None => Err(ArtifactError::MissingConfigError {
                field: path.to_string(),
            }),
        }
    }

    /// Typed value at `path`.
    pub fn value<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let raw = self
            .lookup(path)
            .ok_or_else(|| ArtifactError::MissingConfigError {
                field: path.to_string(),
            })?;

        T::deserialize(raw).map_err(|e| ArtifactError::InvalidConfigValueError {
            field: path.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }

    /// Deserializes the whole mapping into a typed config struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.inner.clone())).map_err(|e| {
            ArtifactError::InvalidConfigValueError {
                field: "<root>".to_string(),
                value: String::new(),
                reason: e.to_string(),
            }
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.inner.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

/// Missing keys index to `Null`, matching `serde_json::Value` indexing.
impl Index<&str> for ConfigBox {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.inner.get(key).unwrap_or(&NULL)
    }
}

impl From<ConfigBox> for Value {
    fn from(config: ConfigBox) -> Self {
        config.into_value()
    }
}

impl PartialEq<Value> for ConfigBox {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Object(map) if *map == self.inner)
    }
}
