use std::path::Path;

use serde::Deserialize;

/// Settings for talking to the admin-panel API.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Base URL of the API, e.g. `http://localhost:8080`.
    pub api_url: String,
}

impl CliConfig {
    /// Resolve the effective configuration. An explicit `--api-url` flag (or
    /// the PANELCTL_API_URL environment variable) wins; the config file is
    /// only consulted when the flag is absent.
    pub fn load(path: &Path, api_url_override: Option<String>) -> anyhow::Result<Self> {
        if let Some(api_url) = api_url_override {
            return Ok(Self { api_url });
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config = toml::from_str(&config_str).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e)
        })?;
        Ok(config)
    }
}
