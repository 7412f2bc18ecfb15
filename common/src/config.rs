use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// off, error, warn, info, debug or trace.
    /// Binaries can compile out the most verbose levels through the `log` crate's
    /// `max_level_*` features, a more verbose setting is then capped at `log::STATIC_MAX_LEVEL`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to info
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }

    /// True if records allowed by this config would be compiled out under `static_max`
    pub fn exceeds(&self, static_max: LevelFilter) -> bool {
        self.level_filter() > static_max
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where the config returned by [`load_config`] came from
#[derive(Debug, PartialEq)]
pub enum ConfigStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Reads a json config file. A missing or malformed file yields the default config, the status
/// tells which happened so it can be logged once the logger is up.
pub fn load_config(path: &Path) -> (Config, ConfigStatus) {
    let contents = match std::fs::read_to_string(path) {
        Ok(x) => x,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return (Config::default(), ConfigStatus::Missing)
        }
        Err(e) => return (Config::default(), ConfigStatus::Invalid(e.to_string())),
    };

    match serde_json::from_str(&contents) {
        Ok(c) => (c, ConfigStatus::Loaded),
        Err(e) => (Config::default(), ConfigStatus::Invalid(e.to_string())),
    }
}
