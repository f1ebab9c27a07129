use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default number of days expanded when neither a period end nor UNTIL is given.
pub const DEFAULT_WINDOW_DAYS: u32 = 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub expansion: ExpansionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Window length used by the CLI when the caller gives no period end.
    pub default_window_days: u32,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            expansion: ExpansionConfig {
                default_window_days: DEFAULT_WINDOW_DAYS,
                output: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables (`CADENCE_` prefix, `__`
    /// between nesting levels) and an optional `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = with_defaults(Config::builder())?
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = with_defaults(Config::builder())?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks value ranges that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the first invalid setting.
    pub fn validate(&self) -> CoreResult<()> {
        if self.expansion.default_window_days == 0 {
            return Err(CoreError::ConfigError(
                "expansion.default_window_days must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>> {
    Ok(builder
        .set_default("logging.level", "info")?
        .set_default("expansion.default_window_days", i64::from(DEFAULT_WINDOW_DAYS))?
        .set_default("expansion.output", "text")?)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    tracing::debug!("Loading configuration");

    Settings::load()
}
