#[cfg(any(feature = "cli", feature = "server"))]
use crate::core::client::DEFAULT_BASE_URL;
#[cfg(any(feature = "cli", feature = "server"))]
use crate::utils::error::Result;
#[cfg(any(feature = "cli", feature = "server"))]
use crate::utils::validation::{validate_url, Validate};
#[cfg(any(feature = "cli", feature = "server"))]
use clap::Parser;
use std::env;

pub const API_KEY_ENV: &str = "NEIS_API_KEY";
pub const PORT_ENV: &str = "PORT";

/// API key from the process environment; empty values count as unset.
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "neis-timetable")]
#[command(about = "Interactive school search and class timetable lookup (NEIS open data)")]
pub struct CliConfig {
    /// NEIS open-data API key; falls back to the NEIS_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(api_key_from_env)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(feature = "server")]
#[derive(Debug, Clone, Parser)]
#[command(name = "neis-timetable-server")]
#[command(about = "HTTP API and static front-end for NEIS school timetable lookup")]
pub struct ServerConfig {
    /// NEIS open-data API key; falls back to the NEIS_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port; falls back to the PORT environment variable, then 5000
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding the prebuilt front-end bundle
    #[arg(long, default_value = "./frontend/build")]
    pub static_dir: String,

    /// Upper bound on each remote NEIS call, in seconds
    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,
}

#[cfg(feature = "server")]
impl ServerConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(api_key_from_env)
    }

    pub fn resolved_port(&self) -> u16 {
        self.port
            .or_else(|| env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()))
            .unwrap_or(5000)
    }
}

#[cfg(feature = "server")]
impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
