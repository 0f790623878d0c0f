//! # Settings
//!
//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/local.toml` (optional)
//! 4. `HAUZE__*` environment variables, `__` separating sections
//!    (e.g. `HAUZE__SERVER__PORT=8080`, `HAUZE__QUOTE__STRICT_QUANTITY=true`)
//!
//! A `.env` file in the working directory is loaded into the environment
//! before the sources are read.
//!
//! # Examples
//!
//! ```
//! use hauze_quote::infrastructure::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.server.port, 3000);
//! assert!(!settings.quote.strict_quantity);
//! ```

use crate::domain::value_objects::enums::QuantityPolicy;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default HTTP port.
const DEFAULT_PORT: u16 = 3000;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable prefix.
const ENV_PREFIX: &str = "HAUZE";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid server address: {e}")))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file to seed the in-memory repository from.
    pub path: Option<PathBuf>,
}

/// Pricing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Reject non-positive or fractional quantities instead of clamping.
    pub strict_quantity: bool,
}

impl QuoteSettings {
    /// Returns the quantity policy these settings select.
    #[must_use]
    pub const fn quantity_policy(&self) -> QuantityPolicy {
        QuantityPolicy::from_strict(self.strict_quantity)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, compact lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server.
    #[serde(default)]
    pub server: ServerSettings,
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Pricing behavior.
    #[serde(default)]
    pub quote: QuoteSettings,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from the default locations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source, including a present `.env` file,
    /// is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        load_env_file(None)?;
        Self::load_from("config")
    }

    /// Loads settings using `dir` as the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed.
    pub fn load_from(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        Self::builder(&dir)?.build()?.try_deserialize()
    }

    fn builder(
        dir: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("quote.strict_quantity", defaults.quote.strict_quantity)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join("local")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            ))
    }
}

/// Loads `path`, or the nearest `.env`, into the process environment.
///
/// A missing file is not an error.
fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    match loaded {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Message(format!("failed to load .env: {err}"))),
    }
}
