use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf};
use validator::Validate;
use visitplan_schedule::{DEFAULT_HORIZON_COUNT, FrequencyRules, MAX_HORIZON_COUNT};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// On-site/remote pairs projected per client
    #[serde(default = "default_horizon_count")]
    pub horizon_count: u32,
    /// Months rendered from the current month onwards
    #[serde(default = "default_months_to_display")]
    pub months_to_display: u32,
    /// IANA zone used to decide which day "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub rules: FrequencyRules,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            horizon_count: default_horizon_count(),
            months_to_display: default_months_to_display(),
            timezone: default_timezone(),
            rules: FrequencyRules::default(),
        }
    }
}

fn default_horizon_count() -> u32 {
    DEFAULT_HORIZON_COUNT
}

fn default_months_to_display() -> u32 {
    36
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_xlsx_path")]
    pub xlsx_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            xlsx_path: default_xlsx_path(),
        }
    }
}

fn default_xlsx_path() -> PathBuf {
    PathBuf::from(visitplan_export::XLSX_FILE_NAME)
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VISITPLAN__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VISITPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.schedule.horizon_count == 0 {
            return Err("Schedule horizon_count must be at least 1".to_string());
        }
        if self.schedule.horizon_count > MAX_HORIZON_COUNT {
            return Err(format!(
                "Schedule horizon_count must be at most {MAX_HORIZON_COUNT}"
            ));
        }
        if self.schedule.months_to_display == 0 {
            return Err("Schedule months_to_display must be at least 1".to_string());
        }
        self.schedule
            .rules
            .validate()
            .map_err(|e| format!("Invalid schedule rules: {e}"))?;

        if !self
            .schedule
            .rules
            .covers_three_years(self.schedule.horizon_count)
        {
            tracing::warn!(
                horizon_count = self.schedule.horizon_count,
                min_onsite_weeks = self.schedule.rules.min_onsite_weeks(),
                "projection horizon is shorter than three years"
            );
        }

        Ok(())
    }
}
