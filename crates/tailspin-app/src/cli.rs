//! Command-line flags
//!
//! Flags override values from the config file, which override defaults.

use std::path::PathBuf;

use clap::Parser;
use tailspin_shared::{AppConfig, SeedSource};

#[derive(Debug, Parser)]
#[command(name = "tailspin")]
#[command(about = "Tailspin Toys - crowdfunding campaign pages")]
#[command(version)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, env = "TAILSPIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "TAILSPIN_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "TAILSPIN_PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "TAILSPIN_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Built-in seed dataset (showcase, minimal)
    #[arg(long, conflicts_with = "seed_file")]
    pub seed_dataset: Option<String>,

    /// JSON file with the campaigns to seed
    #[arg(long)]
    pub seed_file: Option<PathBuf>,
}

impl Cli {
    /// Layer flag values over a loaded config
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if let Some(name) = self.seed_dataset {
            config.seed = SeedSource::Dataset(name);
        }
        if let Some(path) = self.seed_file {
            config.seed = SeedSource::File(path);
        }
        config
    }
}
