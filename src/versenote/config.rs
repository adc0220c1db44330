use crate::error::{Result, VerseError};
use crate::fetch::esv::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::store::fs_backend::DEFAULT_FILE_NAME;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PORT: u16 = 5005;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

pub const ENV_API_TOKEN: &str = "VERSENOTE_API_TOKEN";
pub const ENV_API_URL: &str = "VERSENOTE_API_URL";
pub const ENV_STORE: &str = "VERSENOTE_STORE";
pub const ENV_PORT: &str = "PORT";
/// When set, both config and data live in this directory.
pub const ENV_HOME: &str = "VERSENOTE_HOME";

/// Keys accepted by `get`/`set`, in display order.
pub const KEYS: &[&str] = &[
    "api-url",
    "api-token",
    "timeout-secs",
    "store-path",
    "port",
    "bind-address",
];

/// Configuration for versenote, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Passage text endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Credential for the passage service. Never compiled in.
    #[serde(default)]
    pub api_token: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Interpretations file; defaults to the platform data dir
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Web server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            store_path: None,
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VerseError::Io)?;
        let config: AppConfig = serde_json::from_str(&content).map_err(VerseError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VerseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VerseError::Serialization)?;
        fs::write(config_path, content).map_err(VerseError::Io)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = var(ENV_API_TOKEN) {
            self.api_token = token;
        }
        if let Some(url) = var(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(path) = var(ENV_STORE) {
            self.store_path = Some(PathBuf::from(path));
        }
        if let Some(port) = var(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| VerseError::Config(format!("{} is not a valid port: {}", ENV_PORT, port)))?;
        }
        Ok(())
    }

    /// The interpretations file to use, falling back to `<data_dir>/interpretations.json`.
    pub fn resolve_store_path(&self, data_dir: &Path) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_FILE_NAME))
    }

    /// Display value for a key. The token is masked.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "api-token" => Some(mask_token(&self.api_token)),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            "store-path" => Some(
                self.store_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            "port" => Some(self.port.to_string()),
            "bind-address" => Some(self.bind_address.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => self.api_url = value.to_string(),
            "api-token" => self.api_token = value.to_string(),
            "timeout-secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("timeout-secs must be a whole number, got {}", value))?;
                if secs == 0 {
                    return Err("timeout-secs must be greater than zero".to_string());
                }
                self.timeout_secs = secs;
            }
            "store-path" => self.store_path = Some(PathBuf::from(value)),
            "port" => {
                self.port = value
                    .parse()
                    .map_err(|_| format!("port must be a number between 0 and 65535, got {}", value))?
            }
            "bind-address" => self.bind_address = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "(not set)".to_string();
    }
    let tail: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<char>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}

/// Platform directories for config and data.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(ENV_HOME).filter(|v| !v.is_empty()) {
            return Ok(Self::in_dir(PathBuf::from(home)));
        }
        let dirs = ProjectDirs::from("org", "versenote", "versenote").ok_or_else(|| {
            VerseError::Config("Could not determine a home directory for config and data".to_string())
        })?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Keep config and data side by side in one directory.
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            config_dir: dir.clone(),
            data_dir: dir,
        }
    }
}
