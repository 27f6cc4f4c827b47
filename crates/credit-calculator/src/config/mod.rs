use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculator::CalculatorConfig;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub calculator: CalculatorConfig,
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
            calculator: load_calculator_config()?,
        })
    }
}

/// Rate options read from `CALCULATOR_*`; anything unset keeps its default.
fn load_calculator_config() -> Result<CalculatorConfig, ConfigError> {
    let mut config = CalculatorConfig::default();

    let overrides: [(&'static str, &mut Decimal); 13] = [
        ("CALCULATOR_BASE_RATE", &mut config.base_rate),
        (
            "CALCULATOR_INSURANCE_RATE_REDUCTION",
            &mut config.insurance_rate_reduction,
        ),
        (
            "CALCULATOR_CLIENT_RATE_REDUCTION",
            &mut config.client_rate_reduction,
        ),
        (
            "CALCULATOR_SELF_EMPLOYED_RATE_ADDITION",
            &mut config.self_employed_rate_addition,
        ),
        (
            "CALCULATOR_BUSINESS_OWNER_RATE_ADDITION",
            &mut config.business_owner_rate_addition,
        ),
        (
            "CALCULATOR_MANAGER_RATE_REDUCTION",
            &mut config.manager_rate_reduction,
        ),
        (
            "CALCULATOR_TOP_MANAGER_RATE_REDUCTION",
            &mut config.top_manager_rate_reduction,
        ),
        (
            "CALCULATOR_MARRIED_RATE_REDUCTION",
            &mut config.married_rate_reduction,
        ),
        (
            "CALCULATOR_DIVORCED_RATE_ADDITION",
            &mut config.divorced_rate_addition,
        ),
        (
            "CALCULATOR_FEMALE_RATE_REDUCTION",
            &mut config.female_rate_reduction,
        ),
        (
            "CALCULATOR_MALE_RATE_REDUCTION",
            &mut config.male_rate_reduction,
        ),
        (
            "CALCULATOR_NON_BINARY_RATE_ADDITION",
            &mut config.non_binary_rate_addition,
        ),
        (
            "CALCULATOR_INSURANCE_COEFFICIENT",
            &mut config.insurance_coefficient,
        ),
    ];

    for (key, slot) in overrides {
        if let Ok(raw) = env::var(key) {
            *slot = Decimal::from_str(raw.trim()).map_err(|_| ConfigError::InvalidDecimal {
                key,
                value: raw.clone(),
            })?;
        }
    }

    if config.insurance_coefficient <= Decimal::ZERO {
        return Err(ConfigError::InvalidCoefficient(config.insurance_coefficient));
    }

    Ok(config)
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
    InvalidDecimal { key: &'static str, value: String },
    InvalidCoefficient(Decimal),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDecimal { key, value } => {
                write!(f, "{key} must be a decimal number (found '{value}')")
            }
            ConfigError::InvalidCoefficient(value) => {
                write!(f, "CALCULATOR_INSURANCE_COEFFICIENT must be positive (found {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDecimal { .. }
            | ConfigError::InvalidCoefficient(_) => None,
        }
    }
}
