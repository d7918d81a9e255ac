//! File-based configuration (YAML or JSON)
//!
//! Default location is the user config directory
//! (`~/.config/xlog/config.yaml` on Linux).
//!
//! ```yaml
//! level: info          # id or name
//! format:
//!   print_date: true
//!   print_level_name: true
//! sinks:
//!   v: log             # route verbose to the log channel
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::levels::{LevelRegistry, SinkKind};
use crate::logger::FormatOptions;
use super::error::{ConfigError, ConfigResult};
use super::settings::XLogConfig;

/// On-disk configuration layout
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default level, as id (`"i"`) or name (`"info"`)
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub format: Option<FormatOptions>,

    /// Level id or name → channel
    #[serde(default)]
    pub sinks: HashMap<String, SinkKind>,
}

impl ConfigFile {
    /// Validate against the standard levels
    pub fn resolve(&self) -> ConfigResult<XLogConfig> {
        let levels = LevelRegistry::standard();
        let mut config = XLogConfig::default();

        if let Some(level) = &self.level {
            config.level = levels
                .resolve(level)
                .ok_or_else(|| ConfigError::UnknownLevel(level.clone()))?;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        for (level, sink) in &self.sinks {
            let id = levels
                .resolve(level)
                .ok_or_else(|| ConfigError::UnknownLevel(level.clone()))?;
            config.sinks.insert(id, *sink);
        }

        Ok(config)
    }
}

impl From<&XLogConfig> for ConfigFile {
    fn from(config: &XLogConfig) -> Self {
        Self {
            level: Some(config.level.to_string()),
            format: Some(config.format),
            sinks: config
                .sinks
                .iter()
                .map(|(id, sink)| (id.to_string(), *sink))
                .collect(),
        }
    }
}

/// Loads and saves [`XLogConfig`] from one file
///
/// Files ending in `.json` are read as JSON, anything else as YAML.
///
/// # Example
///
/// ```no_run
/// use xlog_core::config::FileConfigLoader;
///
/// let config = FileConfigLoader::user().load()?.apply_env()?;
/// # Ok::<(), xlog_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level config (`<config dir>/xlog/config.yaml`)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("xlog").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// Read the raw file; a missing file reads as empty
    pub fn read(&self) -> ConfigResult<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        let file: ConfigFile = if self.is_json() {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(file)
    }

    /// Read and validate
    pub fn load(&self) -> ConfigResult<XLogConfig> {
        self.read()?.resolve()
    }

    /// Write `config`, creating parent directories as needed
    pub fn save(&self, config: &XLogConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = ConfigFile::from(config);
        let content = if self.is_json() {
            serde_json::to_string_pretty(&file)?
        } else {
            serde_yaml::to_string(&file)?
        };

        fs::write(&self.path, content)?;
        Ok(())
    }
}
