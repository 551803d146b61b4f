use crate::error::{NotefulError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;
const DEFAULT_LOG_LEVEL: &str = "info";

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("com", "noteful", "noteful"));

/// Server configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotefulConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for requests that match no API route. `None` disables it.
    #[serde(default = "default_public_dir")]
    pub public_dir: Option<PathBuf>,

    /// JSON file replacing the embedded seed dataset
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Request bodies above this size are refused with 413
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write rotated log files here instead of stderr
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_public_dir() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_PUBLIC_DIR))
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for NotefulConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            seed_file: None,
            max_body_bytes: default_max_body_bytes(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl NotefulConfig {
    /// Per-user config directory, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotefulConfig = serde_json::from_str(&content).map_err(|e| {
            NotefulError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(NotefulError::Config("host must not be empty".into()));
        }
        if self.max_body_bytes == 0 {
            return Err(NotefulError::Config(
                "max_body_bytes must be greater than zero".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(NotefulError::Config(format!(
                "unsupported log level `{}` (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// `host:port` suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
