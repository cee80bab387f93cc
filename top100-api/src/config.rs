//! Configuration resolution for top100-api
//!
//! Every setting resolves CLI flag → environment variable → TOML config
//! file → compiled default, once at startup. The resulting `Config` is
//! immutable for the life of the process.

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Port the original deployment served on
const DEFAULT_PORT: u16 = 8040;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Wikipedia population ranking page
pub const DEFAULT_POPULATION_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_countries_and_dependencies_by_population";

/// Static song streaming rankings page
pub const DEFAULT_SONGS_URL: &str = "https://kworb.net/spotify/songs.html";

/// Command-line arguments
///
/// Each flag also reads its TOP100_* environment variable, so the CLI and
/// ENV tiers collapse into one clap pass.
#[derive(Debug, Default, Parser)]
#[command(name = "top100-api", version, about = "Ranking-table scraper API")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "TOP100_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "TOP100_PORT")]
    pub port: Option<u16>,

    /// Population page URL override
    #[arg(long, env = "TOP100_POPULATION_URL")]
    pub population_url: Option<String>,

    /// Songs page URL override
    #[arg(long, env = "TOP100_SONGS_URL")]
    pub songs_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "TOP100_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Optional settings read from the TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub population_url: Option<String>,
    pub songs_url: Option<String>,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub population_url: String,
    pub songs_url: String,
}

impl Config {
    /// Resolve the full configuration from CLI/ENV, TOML, and defaults
    ///
    /// A named config file that cannot be read or parsed is a startup
    /// error, not a silent fallback.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => load_toml_config(path)?,
            None => TomlConfig::default(),
        };

        let host = cli
            .host
            .clone()
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file.port).unwrap_or(DEFAULT_PORT);

        let bind_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("Invalid bind address {}:{}: {}", host, port, e))?;

        let population_url = cli
            .population_url
            .clone()
            .or(file.population_url)
            .unwrap_or_else(|| DEFAULT_POPULATION_URL.to_string());

        let songs_url = cli
            .songs_url
            .clone()
            .or(file.songs_url)
            .unwrap_or_else(|| DEFAULT_SONGS_URL.to_string());

        Ok(Config {
            bind_addr,
            population_url,
            songs_url,
        })
    }
}

fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
    let config = toml::from_str(&content)
        .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&Cli::default()).unwrap();
        assert_eq!(config.bind_addr.port(), 8040);
        assert_eq!(config.population_url, DEFAULT_POPULATION_URL);
        assert_eq!(config.songs_url, DEFAULT_SONGS_URL);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            population_url: Some("http://localhost:1/pop".to_string()),
            songs_url: None,
            config: None,
        };

        let config = Config::resolve(&cli).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.population_url, "http://localhost:1/pop");
        assert_eq!(config.songs_url, DEFAULT_SONGS_URL);
    }

    #[test]
    fn test_invalid_host_rejected() {
        let cli = Cli {
            host: Some("not an address".to_string()),
            ..Cli::default()
        };

        assert!(Config::resolve(&cli).is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/top100.toml")),
            ..Cli::default()
        };

        assert!(Config::resolve(&cli).is_err());
    }
}
