/*
[INPUT]:  YAML configuration file, CLI overrides
[OUTPUT]: Parsed CLI configuration and a configured Roblox client
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use roblox_adapter::http::DEFAULT_BASE_URL;
use roblox_adapter::{ClientConfig, Credentials, Roblox, RobloxClient};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the CLI
#[derive(Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// `.ROBLOSECURITY` token; public endpoints only when absent
    #[serde(default)]
    pub authorization: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Base-url template, `{service}` is replaced by the API host label
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            authorization: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            base_url: default_base_url(),
        }
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("authorization", &self.authorization.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be positive");
        anyhow::ensure!(
            self.connect_timeout_secs > 0,
            "connect_timeout_secs must be positive"
        );
        anyhow::ensure!(!self.base_url.trim().is_empty(), "base_url must not be empty");
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..ClientConfig::default()
        }
    }

    /// Build the client this configuration describes
    pub fn build_roblox(&self) -> anyhow::Result<Roblox> {
        let credentials = self
            .authorization
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(Credentials::new);
        let client =
            RobloxClient::with_config_and_base_url(self.client_config(), credentials, &self.base_url)
                .context("create RobloxClient")?;
        Ok(Roblox::from_client(client))
    }
}
