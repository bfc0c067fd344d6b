use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "optibid.toml";
pub const DEFAULT_DATA_PATH: &str = "data_win_rate.csv";
pub const MAX_PAY_OPTIONS: usize = 10_000;
const APP_DIR: &str = "optibid";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

/// Advertiser pay choices offered by the dashboard: `pay_min..pay_max` by `pay_step`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub pay_min: Decimal,
    pub pay_max: Decimal,
    pub pay_step: Decimal,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            pay_min: Decimal::new(5, 1),
            pay_max: Decimal::new(50, 0),
            pay_step: Decimal::new(5, 1),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pay_step <= Decimal::ZERO {
            return Err(ConfigError::InvalidPayStep(self.pay_step));
        }
        if self.pay_min >= self.pay_max {
            return Err(ConfigError::InvalidPayRange {
                min: self.pay_min,
                max: self.pay_max,
            });
        }

        let too_many = self
            .pay_max
            .checked_sub(self.pay_min)
            .and_then(|span| span.checked_div(self.pay_step))
            .is_none_or(|steps| steps > Decimal::from(MAX_PAY_OPTIONS));
        if too_many {
            return Err(ConfigError::TooManyPayOptions {
                limit: MAX_PAY_OPTIONS,
            });
        }
        Ok(())
    }

    /// Upper bound is exclusive; never yields more than `MAX_PAY_OPTIONS` entries.
    pub fn pay_options(&self) -> Vec<Decimal> {
        if self.pay_step <= Decimal::ZERO {
            return Vec::new();
        }

        let mut options = Vec::new();
        let mut pay = self.pay_min;
        while pay < self.pay_max && options.len() < MAX_PAY_OPTIONS {
            options.push(pay);
            match pay.checked_add(self.pay_step) {
                Some(next) => pay = next,
                None => break,
            }
        }
        options
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub data: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("dashboard pay_step must be positive, got {0}")]
    InvalidPayStep(Decimal),
    #[error("dashboard pay_min ({min}) must be below pay_max ({max})")]
    InvalidPayRange { min: Decimal, max: Decimal },
    #[error("dashboard pay grid would have more than {limit} options")]
    TooManyPayOptions { limit: usize },
}

impl AppConfig {
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(data) = overrides.data {
            self.data.path = data;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.dashboard.validate()?;

    Ok(config)
}

/// An explicit path always wins; otherwise the working directory is tried
/// before the user config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CONFIG_PATH);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(DEFAULT_CONFIG_PATH))
        .filter(|path| path.is_file())
}

/// Returns the config together with the file it came from, if any.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path).map(|config| (config, Some(path))),
        None => Ok((AppConfig::default(), None)),
    }
}
