use backdrop_manifest::ItemFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no explicit config is given
pub const CONFIG_FILE_NAME: &str = "backdrop.toml";

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "BACKDROP_CONFIG";

pub const DEFAULT_COMPONENTS_DIR: &str = "src/lib/backgrounds";
pub const DEFAULT_OUTPUT_DIR: &str = "static/backgrounds";
pub const DEFAULT_EXTENSION: &str = "svelte";
pub const DEFAULT_EXCLUDE: &[&str] = &["copy", ".old", "Old"];
pub const DEFAULT_SCHEMA_URL: &str = backdrop_manifest::REGISTRY_ITEM_SCHEMA;
pub const DEFAULT_ITEM_TYPE: &str = backdrop_manifest::BLOCK_ITEM_TYPE;
pub const DEFAULT_FILE_TYPE: &str = backdrop_manifest::COMPONENT_FILE_TYPE;

/// Keys accepted by `get`/`set`, in display order
pub const KNOWN_KEYS: &[&str] = &[
    "components-dir",
    "output-dir",
    "extension",
    "exclude",
    "schema-url",
    "item-type",
    "file-type",
];

/// Errors raised while loading or saving `backdrop.toml`
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Serialize(toml::ser::Error),
    UnknownKey(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, .. } => {
                write!(f, "Failed to access config {}", path.display())
            }
            ConfigError::Parse { path, .. } => {
                write!(f, "Failed to parse config {}", path.display())
            }
            ConfigError::Serialize(_) => write!(f, "Failed to serialize config"),
            ConfigError::UnknownKey(key) => write!(
                f,
                "Unknown config key: {}. Supported keys: {}",
                key,
                KNOWN_KEYS.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::UnknownKey(_) => None,
        }
    }
}

/// Contents of `backdrop.toml`. Unset keys fall back to the defaults above.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl Config {
    /// Resolve which config file applies to a project.
    ///
    /// An explicit path wins, then a non-empty `BACKDROP_CONFIG`, then
    /// `backdrop.toml` in the project root.
    pub fn path(project_root: &Path, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// A config with every key spelled out, used by `backdrop init`
    pub fn with_defaults() -> Self {
        Config {
            components_dir: Some(DEFAULT_COMPONENTS_DIR.to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            exclude: Some(DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()),
            schema_url: Some(DEFAULT_SCHEMA_URL.to_string()),
            item_type: Some(DEFAULT_ITEM_TYPE.to_string()),
            file_type: Some(DEFAULT_FILE_TYPE.to_string()),
        }
    }

    pub fn get_components_dir(&self) -> String {
        self.components_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPONENTS_DIR.to_string())
    }

    pub fn get_output_dir(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Source extension without the leading dot
    pub fn get_extension(&self) -> String {
        let ext = self
            .extension
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        ext.trim_start_matches('.').to_string()
    }

    pub fn get_exclude(&self) -> Vec<String> {
        self.exclude
            .clone()
            .unwrap_or_else(|| DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect())
    }

    pub fn get_schema_url(&self) -> String {
        self.schema_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SCHEMA_URL.to_string())
    }

    pub fn get_item_type(&self) -> String {
        self.item_type
            .clone()
            .unwrap_or_else(|| DEFAULT_ITEM_TYPE.to_string())
    }

    pub fn get_file_type(&self) -> String {
        self.file_type
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string())
    }

    /// Tags stamped onto every manifest of a run
    pub fn item_format(&self) -> ItemFormat {
        ItemFormat {
            schema: self.get_schema_url(),
            item_type: self.get_item_type(),
            file_type: self.get_file_type(),
        }
    }

    /// Effective value of a key, defaults included
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "components-dir" => Some(self.get_components_dir()),
            "output-dir" => Some(self.get_output_dir()),
            "extension" => Some(self.get_extension()),
            "exclude" => Some(self.get_exclude().join(",")),
            "schema-url" => Some(self.get_schema_url()),
            "item-type" => Some(self.get_item_type()),
            "file-type" => Some(self.get_file_type()),
            _ => None,
        }
    }

    /// Set a key from its string form. `exclude` takes a comma separated list.
    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "components-dir" => self.components_dir = Some(value),
            "output-dir" => self.output_dir = Some(value),
            "extension" => self.extension = Some(value),
            "exclude" => {
                self.exclude = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| s.to_string())
                        .collect(),
                )
            }
            "schema-url" => self.schema_url = Some(value),
            "item-type" => self.item_type = Some(value),
            "file-type" => self.file_type = Some(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Effective key/value pairs in display order
    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        KNOWN_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
