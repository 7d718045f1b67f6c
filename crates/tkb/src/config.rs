//! Service configuration, read once from the environment at startup.

use std::path::PathBuf;
use thiserror::Error;

pub const SERVICE_NAME: &str = "tkb-service";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but isn't a valid port number
    #[error("Invalid PORT value: {value}")]
    InvalidPort { value: String },

    /// Timetable file couldn't be read
    #[error("Failed to read timetable file {path}: {message}")]
    ScheduleRead { path: String, message: String },

    /// Timetable file isn't valid timetable JSON
    #[error("Failed to parse timetable file {path}: {message}")]
    ScheduleParse { path: String, message: String },

    /// A session's counterpart doesn't fit the schedule it's in
    #[error("Session on {day} in the {role} schedule has the wrong counterpart field")]
    MismatchedCounterpart { role: &'static str, day: String },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    /// Node identifier, reported in health and metadata
    pub node: String,
    pub service_name: String,
    pub version: String,
    /// Deployment location tag (e.g. "AWS Singapore")
    pub location: String,
    /// Cloud region (e.g. "ap-southeast-1")
    pub region: String,
    /// Optional JSON file replacing the built-in timetable
    pub schedule_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            node: var("HOSTNAME").unwrap_or(defaults.node),
            location: var("TKB_LOCATION").unwrap_or(defaults.location),
            region: var("TKB_REGION").unwrap_or(defaults.region),
            schedule_file: var("TKB_SCHEDULE_FILE").map(PathBuf::from),
            ..defaults
        })
    }

    /// Location with region, e.g. "AWS Singapore (ap-southeast-1)".
    pub fn location_with_region(&self) -> String {
        format!("{} ({})", self.location, self.region)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            node: "unknown".to_string(),
            service_name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            location: "AWS Singapore".to_string(),
            region: "ap-southeast-1".to_string(),
            schedule_file: None,
        }
    }
}
