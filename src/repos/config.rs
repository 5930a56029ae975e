use anyhow::Error;
use dirs_next::config_dir;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::clients::deepseek::DEEPSEEK_API_URL;
use crate::models::chat_request::DEFAULT_MODEL;

#[derive(Debug, Deserialize, Serialize)]
pub struct TinystepConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,
}

fn default_model() -> Option<String> {
    Some(DEFAULT_MODEL.to_string())
}
fn default_base_url() -> Option<String> {
    Some(DEEPSEEK_API_URL.to_string())
}

impl Default for TinystepConfig {
    fn default() -> Self {
        TinystepConfig {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

static CONFIG: OnceCell<TinystepConfig> = OnceCell::new();

fn get_tinystep_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| env::current_dir().unwrap());
    path.push("tinystep");
    path.push("tinystep.toml");
    path
}

fn load_config_file() -> TinystepConfig {
    let path = get_tinystep_config_path();
    debug!("Loading config from {}", path.display());
    if path.exists() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        // Create the directory and file, and write defaults
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let default = TinystepConfig::default();
        let toml_str = toml::to_string_pretty(&default).unwrap_or_default();
        let _ = fs::write(&path, toml_str);
        default
    }
}

fn get_config() -> &'static TinystepConfig {
    CONFIG.get_or_init(load_config_file)
}

pub fn get_api_key() -> Option<String> {
    get_config()
        .api_key
        .clone()
        .or_else(|| env::var("DEEPSEEK_API_KEY").ok())
}

pub fn get_model() -> String {
    get_config()
        .model
        .clone()
        .or_else(|| env::var("TINYSTEP_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

pub fn get_base_url() -> String {
    get_config()
        .base_url
        .clone()
        .or_else(|| env::var("TINYSTEP_BASE_URL").ok())
        .unwrap_or_else(|| DEEPSEEK_API_URL.to_string())
}

/// Write one configuration value back to the config file. Reads the file
/// fresh so a stale process-wide cache is never persisted.
pub fn set_config_value(key: &str, value: &str) -> Result<(), Error> {
    let path = get_tinystep_config_path();
    let mut config: TinystepConfig = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        TinystepConfig::default()
    };

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        "base_url" => config.base_url = Some(value.to_string()),
        other => return Err(Error::msg(format!("Unknown config key: {}", other))),
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml::to_string_pretty(&config)?)?;
    Ok(())
}

pub fn get_config_value(key: &str) -> Result<Option<String>, Error> {
    match key {
        "api_key" => Ok(get_api_key()),
        "model" => Ok(Some(get_model())),
        "base_url" => Ok(Some(get_base_url())),
        other => Err(Error::msg(format!("Unknown config key: {}", other))),
    }
}

/// The credential facility handed to the chat client. Built once at the CLI
/// boundary; the client itself never reads process-wide state.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: Option<String>,
}

impl Credentials {
    #[allow(dead_code)]
    pub fn new(api_key: impl Into<String>) -> Self {
        Credentials {
            api_key: Some(api_key.into()),
        }
    }

    #[allow(dead_code)]
    pub fn none() -> Self {
        Credentials { api_key: None }
    }

    pub fn from_config() -> Self {
        Credentials {
            api_key: get_api_key(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
