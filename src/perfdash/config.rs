use crate::error::{DashError, Result};
use crate::source::assign::{AssignMode, MetadataAssigner};
use crate::source::http::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIMIT: u32 = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Keys accepted by [`DashConfig::get`] and [`DashConfig::set`].
pub const CONFIG_KEYS: [&str; 5] = ["base-url", "limit", "timeout", "assign-mode", "seed"];

/// Configuration for perfdash, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashConfig {
    /// Root of the users API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How many employees to request
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Request timeout, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How department and rating are drawn
    #[serde(default)]
    pub assign_mode: AssignMode,

    /// Salt for stable assignment
    #[serde(default)]
    pub seed: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            assign_mode: AssignMode::default(),
            seed: 0,
        }
    }
}

impl DashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DashConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn assigner(&self) -> MetadataAssigner {
        MetadataAssigner::new(self.assign_mode, self.seed)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "limit" => Some(self.limit.to_string()),
            "timeout" => Some(self.timeout_secs.to_string()),
            "assign-mode" => Some(self.assign_mode.to_string()),
            "seed" => Some(self.seed.to_string()),
            _ => None,
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "base-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(DashError::Config(format!(
                        "base-url must start with http:// or https://, got {}",
                        value
                    )));
                }
                self.base_url = value.trim_end_matches('/').to_string();
            }
            "limit" => {
                self.limit = parse_positive(key, value)?;
            }
            "timeout" => {
                self.timeout_secs = u64::from(parse_positive(key, value)?);
            }
            "assign-mode" => {
                self.assign_mode = value.parse()?;
            }
            "seed" => {
                self.seed = value
                    .parse()
                    .map_err(|_| DashError::Config(format!("seed must be an integer, got {}", value)))?;
            }
            other => return Err(DashError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DashError::Config(format!(
            "{} must be a positive integer, got {}",
            key, value
        ))),
    }
}
