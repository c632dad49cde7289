use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration, immutable for the process lifetime.
///
/// Loaded from a YAML file (path in the `CONFIG` env var, default
/// `config.yaml`); a missing file falls back to defaults. `LISTEN` and
/// `DOC_ROOT` env vars override their file counterparts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_doc_root")]
    pub doc_root: PathBuf,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_doc_root() -> PathBuf {
    PathBuf::from("./public")
}

fn default_read_timeout_secs() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            doc_root: default_doc_root(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl StaticFilesConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_yaml(&contents)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.static_files.doc_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
