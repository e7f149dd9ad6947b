use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::catalog::{
    CardEnv, CurrencyFormatter, EnglishPluralizer, PathRouter, RecencyWindow, SystemClock, Theme,
};
use crate::error::{Error, Result};

/// Environment variable prefix, e.g. `SHOE_CARD_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "SHOE_CARD";

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Days a release counts as new
    #[arg(long)]
    pub recency_days: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path prefix of shoe detail pages.
    pub detail_prefix: String,
    pub currency_symbol: String,
    /// Decimal places between stored amounts and display units (2 for cents).
    pub minor_units: u32,
    pub recency_days: i64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args())
    }

    /// Layering, lowest to highest: defaults, config file, `SHOE_CARD_*` env, CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)
            .map_err(|e| Error::Config(config::ConfigError::Message(e.to_string())))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("catalog.detail_prefix", "/shoe")?
            .set_default("catalog.currency_symbol", "$")?
            .set_default("catalog.minor_units", 2)?
            .set_default("catalog.recency_days", RecencyWindow::DEFAULT_DAYS)?;

        if let Some(path) = config_file(cli.config.as_deref()) {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(days) = cli.recency_days {
            builder = builder.set_override("catalog.recency_days", days)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.recency_days < 0 {
            return Err(Error::InvalidSetting(format!(
                "catalog.recency_days must not be negative, got {}",
                self.catalog.recency_days
            )));
        }
        if chrono::Duration::try_days(self.catalog.recency_days).is_none() {
            return Err(Error::InvalidSetting(format!(
                "catalog.recency_days is out of range, got {}",
                self.catalog.recency_days
            )));
        }
        if self.catalog.minor_units > 9 {
            return Err(Error::InvalidSetting(format!(
                "catalog.minor_units must be at most 9, got {}",
                self.catalog.minor_units
            )));
        }
        Ok(())
    }

    /// Collaborators for rendering cards with this configuration.
    pub fn card_env(&self) -> CardEnv {
        CardEnv {
            router: Arc::new(PathRouter::new(self.catalog.detail_prefix.clone())),
            formatter: Arc::new(CurrencyFormatter::new(
                self.catalog.currency_symbol.clone(),
                self.catalog.minor_units,
            )),
            pluralizer: Arc::new(EnglishPluralizer),
            recency: Arc::new(RecencyWindow::days(
                self.catalog.recency_days,
                Arc::new(SystemClock),
            )),
            theme: self.theme.clone(),
        }
    }
}

/// Explicit path wins; otherwise `./config.yaml` when it exists.
fn config_file(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            fallback.exists().then(|| fallback.to_path_buf())
        }
    }
}
