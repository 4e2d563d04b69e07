use anyhow::{Context, Result};
use authcode_google::GoogleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const CLIENT_ID_ENV: &str = "GOOGLE_CLIENT_ID";
pub const REDIRECT_URI_ENV: &str = "GOOGLE_REDIRECT_URI";

const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/oauth/callback";
const DEFAULT_BACKEND_ENDPOINT: &str = "http://localhost:3000/google/oauth";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub google: GoogleConfig,
    pub callback: CallbackConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackConfig {
    pub listen: bool,
}

/// Endpoint shown in the follow-up request example. Never called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google: GoogleConfig {
                client_id: String::new(),
                redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            },
            callback: CallbackConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self { listen: true }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BACKEND_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::info!("Using default config: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(client_id) = lookup(CLIENT_ID_ENV) {
            self.google.client_id = client_id;
        }
        if let Some(redirect_uri) = lookup(REDIRECT_URI_ENV) {
            self.google.redirect_uri = redirect_uri;
        }
    }

    /// Where the view "lives" before any callback: the redirect URI itself.
    pub fn landing_location(&self) -> Result<Url> {
        Url::parse(&self.google.redirect_uri)
            .or_else(|_| Url::parse(DEFAULT_REDIRECT_URI))
            .context("Failed to build landing location")
    }
}
