use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::resolver::ResolverConfig;

const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 5;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resolver: ResolverSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("RECSERVE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RECSERVE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the backend configuration for the recommendation resolver.
    pub fn resolver_runtime(&self) -> Result<ResolverConfig> {
        self.resolver.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResolverSection {
    pub backend: ResolverBackendKind,
    pub table: Option<TableResolverSection>,
    pub remote: Option<RemoteResolverSection>,
}

impl ResolverSection {
    pub fn to_runtime(&self) -> Result<ResolverConfig> {
        match self.backend {
            ResolverBackendKind::Table => {
                let table = self.table.clone().unwrap_or_default();

                if !table.default_score.is_finite() {
                    bail!("resolver.table.default_score must be finite");
                }

                Ok(ResolverConfig::Table {
                    scores_path: table.scores_path.map(PathBuf::from),
                    default_score: table.default_score,
                })
            }
            ResolverBackendKind::Remote => {
                let remote = self
                    .remote
                    .clone()
                    .context("resolver.remote configuration required when backend is 'remote'")?;

                if remote.endpoint.trim().is_empty() {
                    bail!("resolver.remote.endpoint must be specified");
                }
                if remote.timeout_secs == 0 {
                    bail!("resolver.remote.timeout_secs must be greater than zero");
                }

                Ok(ResolverConfig::Remote {
                    endpoint: remote.endpoint,
                    timeout_secs: remote.timeout_secs,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackendKind {
    #[default]
    Table,
    Remote,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TableResolverSection {
    pub scores_path: Option<String>,
    pub default_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteResolverSection {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RemoteResolverSection {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
