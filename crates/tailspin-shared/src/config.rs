//! Configuration types for Tailspin

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TailspinError};
use crate::json::read_json;

/// Where the startup campaigns come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// One of the built-in datasets, by name
    Dataset(String),
    /// A JSON array of campaigns on disk
    File(PathBuf),
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Dataset(crate::seed::DEFAULT_DATASET.to_string())
    }
}

/// Application configuration (config.json)
///
/// Every field is optional in the file; missing ones take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Startup campaigns
    pub seed: SeedSource,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
            seed: SeedSource::default(),
            log_filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// The address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| TailspinError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
