//! Layered application configuration.
//!
//! Sources, later ones winning: built-in defaults, the YAML file given with
//! `--config`, `FEDCAT__SECTION__KEY` environment variables, CLI flags.

use anyhow::{Context, Result, bail};
use catalog_gateway::config::CatalogGatewayConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use node_directory::config::NodeDirectoryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const ENV_PREFIX: &str = "FEDCAT__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub node_directory: NodeDirectoryConfig,
    pub catalog_gateway: CatalogGatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are answered with 408.
    #[serde(with = "fedcat_utils::humantime_serde")]
    pub request_timeout: Duration,
    /// Prefix of every API route, e.g. `/api/v1`.
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8087,
            request_timeout: Duration::from_secs(30),
            base_path: "/api/v1".to_owned(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,catalog_gateway=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Plain,
        }
    }
}

/// Values taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    /// Fails if the file is missing, a value has the wrong type, a key is
    /// unknown or the result does not validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path.filter(|p| !p.is_file()) {
            bail!("config file does not exist: {}", path.display());
        }

        let config: Self = Self::figment(path)
            .extract()
            .context("failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        let level = match overrides.verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    fn validate(&self) -> Result<()> {
        let base = &self.server.base_path;
        if !base.starts_with('/') || (base.len() > 1 && base.ends_with('/')) {
            bail!("server.base_path must start with '/' and not end with one: `{base}`");
        }
        if self.server.request_timeout.is_zero() {
            bail!("server.request_timeout must be greater than zero");
        }
        Ok(())
    }
}
