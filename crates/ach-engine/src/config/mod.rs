use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::analysis::{ConfidenceSchedule, ConfidenceThresholds, ScoringConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: load_scoring_config()?,
        })
    }
}

fn load_scoring_config() -> Result<ScoringConfig, ConfigError> {
    let defaults = ScoringConfig::default();

    let logarithmic = load_thresholds(
        "ACH_LOG_HIGH_GAP",
        "ACH_LOG_MEDIUM_GAP",
        defaults.confidence.logarithmic,
    )?;
    let linear = load_thresholds(
        "ACH_LINEAR_HIGH_GAP",
        "ACH_LINEAR_MEDIUM_GAP",
        defaults.confidence.linear,
    )?;

    let diagnostic_limit = match env::var("ACH_DIAGNOSTIC_LIMIT") {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidDiagnosticLimit)?,
        Err(_) => defaults.diagnostic_limit,
    };

    Ok(ScoringConfig {
        confidence: ConfidenceSchedule {
            logarithmic,
            linear,
        },
        diagnostic_limit,
    })
}

fn load_thresholds(
    high_var: &'static str,
    medium_var: &'static str,
    defaults: ConfidenceThresholds,
) -> Result<ConfidenceThresholds, ConfigError> {
    let thresholds = ConfidenceThresholds::new(
        env_gap(high_var, defaults.high)?,
        env_gap(medium_var, defaults.medium)?,
    );

    if thresholds.is_ordered() {
        Ok(thresholds)
    } else {
        Err(ConfigError::UnorderedThresholds {
            high: high_var,
            medium: medium_var,
        })
    }
}

fn env_gap(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidThreshold { name }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { name: &'static str },
    UnorderedThresholds {
        high: &'static str,
        medium: &'static str,
    },
    InvalidDiagnosticLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { name } => {
                write!(f, "{name} must be a finite, non-negative number")
            }
            ConfigError::UnorderedThresholds { high, medium } => {
                write!(f, "{high} must be greater than or equal to {medium}")
            }
            ConfigError::InvalidDiagnosticLimit => {
                write!(f, "ACH_DIAGNOSTIC_LIMIT must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold { .. }
            | ConfigError::UnorderedThresholds { .. }
            | ConfigError::InvalidDiagnosticLimit => None,
        }
    }
}
