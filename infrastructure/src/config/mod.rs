mod presence;

pub use presence::{ActivityConfig, ActivityKind, PresenceConfig, StatusConfig};

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, instrument};

pub const DEFAULT_CONFIG_PATH: &str = "Watcher/config.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML in configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("`{0}` is not a mapping")]
    NotAMapping(String),
    #[error("Missing configuration key `{0}`")]
    MissingKey(String),
    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// A YAML document on disk, addressed by dotted paths such as
/// `activity.message`. Every `set` rewrites the file before returning, so
/// async callers should go through `spawn_blocking`.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: Mutex<Value>,
}

impl ConfigStore {
    /// Loads the document at `path`, seeding it with `default_document`
    /// first when the file does not exist.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_or_seed(
        path: impl AsRef<Path>,
        default_document: &str,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, default_document).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            info!("Seeded configuration from defaults");
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let document = match serde_yaml::from_str::<Value>(&raw)? {
            Value::Null => Value::Mapping(Mapping::new()),
            document @ Value::Mapping(_) => document,
            _ => return Err(ConfigError::NotAMapping("<root>".to_string())),
        };

        info!("Configuration loaded");

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let document = self.document.lock().unwrap_or_else(PoisonError::into_inner);

        key.split('.')
            .try_fold(&*document, |value, segment| value.get(segment))
            .cloned()
    }

    /// Scalars are rendered as strings, mappings and sequences are not.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(value) => Some(value),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    #[instrument(level = "info", skip(self, value))]
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let mut document = self.document.lock().unwrap_or_else(PoisonError::into_inner);

        // Only the persisted document becomes visible to readers.
        let mut updated = document.clone();
        let mut segments = key.split('.').peekable();
        let mut current = &mut updated;
        while let Some(segment) = segments.next() {
            let Value::Mapping(mapping) = current else {
                return Err(ConfigError::NotAMapping(key.to_string()));
            };
            let segment = Value::String(segment.to_string());

            if segments.peek().is_none() {
                mapping.insert(segment, value.into());
                break;
            }

            current = mapping
                .entry(segment)
                .or_insert_with(|| Value::Mapping(Mapping::new()));
        }

        let serialized = serde_yaml::to_string(&updated)?;
        fs::write(&self.path, serialized).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        *document = updated;
        Ok(())
    }

    pub fn presence(&self) -> Result<PresenceConfig, ConfigError> {
        PresenceConfig::from_store(self)
    }
}
