use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
const DEFAULT_SERVER_NAME: &str = "ward";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory that resolved request paths are located under.
    pub root: PathBuf,
    /// Value of the `Server` response header.
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            root: PathBuf::from("."),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Builds the runtime configuration.
    ///
    /// `WARD_CONFIG` may name a YAML file that is read first; `LISTEN`,
    /// `WARD_ROOT` and `WARD_SERVER_NAME` override whatever it set.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("WARD_CONFIG") {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("WARD_ROOT") {
            cfg.root = PathBuf::from(root);
        }
        if let Ok(server_name) = std::env::var("WARD_SERVER_NAME") {
            cfg.server_name = server_name;
        }

        Ok(cfg)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
