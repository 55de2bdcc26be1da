//! Configuration for Heritage

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "heritage.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Directory searched for the datasets before the fallback locations
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Exhibits dataset file name
    #[serde(default = "default_exhibits_file")]
    pub exhibits_file: String,

    /// Artefacts dataset file name
    #[serde(default = "default_artefacts_file")]
    pub artefacts_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
            data_dir: None,
            exhibits_file: default_exhibits_file(),
            artefacts_file: default_artefacts_file(),
        }
    }
}

impl Config {
    /// Load config from `heritage.toml` in the working directory, or defaults
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.exhibits_file.trim().is_empty() || config.artefacts_file.trim().is_empty() {
            return Err(Error::Config("Dataset file names must not be empty".into()));
        }
        Ok(config)
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.http_port)
            .parse()
            .map_err(|e| {
                Error::Config(format!(
                    "Invalid bind address {}:{}: {}",
                    self.bind_address, self.http_port, e
                ))
            })
    }
}

// Default value functions

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_exhibits_file() -> String {
    "exhibits.json".to_string()
}

fn default_artefacts_file() -> String {
    "qm_data.json".to_string()
}
