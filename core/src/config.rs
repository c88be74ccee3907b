// ABOUTME: Configuration parsing for the charger app.
// ABOUTME: Reads an optional TOML file into typed timer and suggestion settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "HFC_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SimulationConfig {
    pub charge_interval_ms: u64,
    pub clock_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            charge_interval_ms: 3000,
            clock_interval_ms: 1000,
        }
    }
}

impl SimulationConfig {
    pub fn charge_interval(&self) -> Duration {
        Duration::from_millis(self.charge_interval_ms.max(1))
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SuggestConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 20,
        }
    }
}

impl SuggestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The credential, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub suggest: SuggestConfig,
}

impl Config {
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse charger config")
    }

    /// Missing file means defaults; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// `$HFC_CONFIG`, else `<config dir>/hfc/charger.toml`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("hfc").join("charger.toml")))
    }
}
