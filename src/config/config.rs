use crate::api_client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "SWAPI_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the SWAPI deployment, without the `/api` suffix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize CLI output
    pub use_color: bool,

    /// Maximum rows printed by `list` commands (0 = no limit)
    pub max_rows: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("swapi-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            max_rows: 0,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults when
    /// no file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Apply `SWAPI_BASE_URL` if it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        self.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
    }

    fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("swapi-client").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        format!(
            r#"# SWAPI client configuration
# Location: ~/.config/swapi-client/config.toml (Linux)
#           ~/Library/Application Support/swapi-client/config.toml (macOS)
#           %APPDATA%\swapi-client\config.toml (Windows)

[api]
# Root of the SWAPI deployment (SWAPI_BASE_URL overrides this)
base_url = "{base_url}"

# Per-request timeout in seconds
timeout_secs = {timeout}

# User-Agent header sent with every request
user_agent = "{user_agent}"

[display]
# Colorize CLI output
use_color = true

# Maximum rows printed by list commands (0 = no limit)
max_rows = 0
"#,
            base_url = DEFAULT_BASE_URL,
            timeout = ApiConfig::default().timeout_secs,
            user_agent = ApiConfig::default().user_agent,
        )
    }
}
