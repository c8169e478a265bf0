//! Server configuration loading.
//!
//! Configuration comes from a `server.toml` file in the working
//! directory; every field has a default, and a missing file means all
//! defaults.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind on. Defaults to 127.0.0.1.
    #[serde(default = "default_host")]
    pub host: IpAddr,
    /// Port to listen on. Defaults to 3000.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for non-API requests. Defaults to "static".
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// The config file read at startup.
    pub const FILE: &'static str = "server.toml";

    /// Loads configuration from [`ServerConfig::FILE`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(Self::FILE))
    }

    /// Loads configuration from the given path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
