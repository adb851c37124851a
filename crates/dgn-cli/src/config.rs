//! Configuration for the dgn CLI
//! Read from `<config dir>/dgn/config.toml` unless `--config` names another file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main dgn configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DgnConfig {
    /// Data file configuration
    #[serde(default)]
    pub data: DataConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report formatting
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Graph file used when `--file` is not given
    #[serde(default = "default_graph_file")]
    pub graph_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            graph_file: default_graph_file(),
        }
    }
}

fn default_graph_file() -> PathBuf {
    PathBuf::from("grafo.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Decimal places used when printing path costs
    #[serde(default = "default_cost_precision")]
    pub cost_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cost_precision: default_cost_precision(),
        }
    }
}

fn default_cost_precision() -> usize {
    2
}

impl DgnConfig {
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.logging
            .level
            .parse()
            .map_err(|_| anyhow!("invalid logging.level '{}'", self.logging.level))
    }
}

/// Default config location: `<config dir>/dgn/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dgn").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist; a missing default file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<DgnConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(DgnConfig::default()),
        },
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<DgnConfig> {
    let config: DgnConfig = toml::from_str(contents)?;
    config.log_level()?;
    Ok(config)
}
