use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file consulted when no `--config` flag is given
pub const DEFAULT_CONFIG_FILE: &str = "performa.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the three fitted artifact files live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default = "default_artifact_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_model_file")]
    pub model_file: String,

    #[serde(default = "default_scaler_file")]
    pub scaler_file: String,

    #[serde(default = "default_label_encoder_file")]
    pub label_encoder_file: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_model_file() -> String {
    "model_performa.json".to_string()
}

fn default_scaler_file() -> String {
    "scaler.json".to_string()
}

fn default_label_encoder_file() -> String {
    "label_encoder.json".to_string()
}

impl ServiceConfig {
    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: ServiceConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist; otherwise
    /// `performa.toml` is used when present, compiled-in defaults if not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(ServiceConfig::default())
                }
            }
        }
    }

    /// Overlay command-line overrides onto the loaded configuration
    pub fn apply_cli(
        &mut self,
        host: Option<&str>,
        port: Option<u16>,
        artifact_dir: Option<&Path>,
    ) {
        if let Some(host) = host {
            self.server.host = host.to_string();
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(dir) = artifact_dir {
            self.artifacts.dir = dir.to_path_buf();
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts.dir.join(&self.artifacts.model_file)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.artifacts.dir.join(&self.artifacts.scaler_file)
    }

    pub fn label_encoder_path(&self) -> PathBuf {
        self.artifacts.dir.join(&self.artifacts.label_encoder_file)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            server: ServerConfig::default(),
            artifacts: ArtifactConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        ArtifactConfig {
            dir: default_artifact_dir(),
            model_file: default_model_file(),
            scaler_file: default_scaler_file(),
            label_encoder_file: default_label_encoder_file(),
        }
    }
}
