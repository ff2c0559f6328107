use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Profile document the cards are built from.
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_content_path() -> PathBuf {
    config_dir().join("profile.json")
}

fn config_dir() -> PathBuf {
    UserDirs::new()
        .map(|u| u.home_dir().join(".cardfolio"))
        .unwrap_or_else(|| PathBuf::from(".cardfolio"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            content_path: default_content_path(),
            classifier: ClassifierConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

// ── Classification oracle ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// OpenAI-compatible base URL of the classification oracle.
    #[serde(default = "default_classifier_endpoint")]
    pub endpoint: String,
    /// Bearer credential. Absent key means fallback-only classification.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_classifier_model")]
    pub model: String,
}

fn default_classifier_endpoint() -> String {
    "https://integrate.api.nvidia.com/v1".into()
}

fn default_classifier_model() -> String {
    "nvidia/nvidia-nemotron-nano-9b-v2".into()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_classifier_endpoint(),
            api_key: None,
            model: default_classifier_model(),
        }
    }
}

// ── Gateway ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_host")]
    pub host: String,
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}

fn default_gateway_port() -> u16 {
    3000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

impl Config {
    /// Load `~/.cardfolio/config.toml`, creating the directory and a default
    /// config on first run. Environment overrides are applied afterwards.
    pub fn load_or_init() -> Result<Self> {
        let dir = config_dir();
        let config_path = dir.join("config.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir).context("Failed to create .cardfolio directory")?;
        }

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.config_path = config_path;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // API key: CARDFOLIO_API_KEY or NVIDIA_API_KEY
        if let Ok(key) =
            std::env::var("CARDFOLIO_API_KEY").or_else(|_| std::env::var("NVIDIA_API_KEY"))
        {
            if !key.is_empty() {
                self.classifier.api_key = Some(key);
            }
        }

        if let Ok(endpoint) = std::env::var("CARDFOLIO_ENDPOINT") {
            if !endpoint.is_empty() {
                self.classifier.endpoint = endpoint;
            }
        }

        if let Ok(model) = std::env::var("CARDFOLIO_MODEL") {
            if !model.is_empty() {
                self.classifier.model = model;
            }
        }

        if let Ok(content) = std::env::var("CARDFOLIO_CONTENT") {
            if !content.is_empty() {
                self.content_path = PathBuf::from(content);
            }
        }

        if let Ok(port_str) =
            std::env::var("CARDFOLIO_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
        {
            if let Ok(port) = port_str.parse::<u16>() {
                self.gateway.port = port;
            }
        }

        if let Ok(host) = std::env::var("CARDFOLIO_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
        {
            if !host.is_empty() {
                self.gateway.host = host;
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
