use super::store::DEFAULT_STORAGE_KEY;
use crate::domain::{ShutdownAdvisor, StreakThresholds, WeekTemplate, DEFAULT_SHUTDOWN_HOUR};
use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    /// IANA zone used for "today" and the shutdown hour
    pub timezone: String,
    pub shutdown_hour: u32,
    pub shutdown_check_secs: u64,
    pub streak_thresholds: StreakThresholds,
    pub week: WeekTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            timezone: "America/New_York".to_string(),
            shutdown_hour: DEFAULT_SHUTDOWN_HOUR,
            shutdown_check_secs: 60,
            streak_thresholds: StreakThresholds::default(),
            week: WeekTemplate::default(),
        }
    }
}

impl Config {
    /// Reference timezone, falling back to New York when the name is unknown
    pub fn zone(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(timezone = %self.timezone, "unknown timezone, using America/New_York");
            chrono_tz::America::New_York
        })
    }

    pub fn shutdown_advisor(&self) -> ShutdownAdvisor {
        ShutdownAdvisor::new(self.zone(), self.shutdown_hour)
    }

    pub fn shutdown_interval(&self) -> Duration {
        Duration::from_secs(self.shutdown_check_secs.max(1))
    }
}

/// Load config from config.json; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Load config, logging and falling back to defaults when the file is unusable
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Config {
    load_config(path).unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "using default config");
        Config::default()
    })
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    super::atomic_write(path, &json).context("Failed to write config")?;
    Ok(())
}
