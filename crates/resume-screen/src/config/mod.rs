use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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

/// Which scoring strategy a deployment runs. Never switched per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategyKind {
    Rules,
    Statistical,
}

impl ScoringStrategyKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule-based" => Ok(Self::Rules),
            "statistical" | "classifier" => Ok(Self::Statistical),
            other => Err(ConfigError::InvalidStrategy {
                value: other.to_string(),
            }),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningConfig,
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

        let policy_preset =
            env::var("SCREENING_POLICY").unwrap_or_else(|_| "threshold_50".to_string());
        let strategy = match env::var("SCREENING_STRATEGY") {
            Ok(value) => ScoringStrategyKind::parse(&value)?,
            Err(_) => ScoringStrategyKind::Rules,
        };
        let dataset_path = env::var("SCREENING_DATASET").ok().map(PathBuf::from);
        let select_label =
            env::var("SCREENING_SELECT_LABEL").unwrap_or_else(|_| "Hire".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            screening: ScreeningConfig {
                policy_preset,
                strategy,
                dataset_path,
                select_label,
            },
        })
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Deployment dials for the screening engine: which policy preset applies,
/// which strategy scores submissions, and where the labeled corpus lives when
/// the statistical strategy is active.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub policy_preset: String,
    pub strategy: ScoringStrategyKind,
    pub dataset_path: Option<PathBuf>,
    pub select_label: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStrategy { value: String },
    UnknownPolicyPreset { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidStrategy { value } => {
                write!(
                    f,
                    "SCREENING_STRATEGY '{value}' is not one of 'rules' or 'statistical'"
                )
            }
            ConfigError::UnknownPolicyPreset { value } => {
                write!(f, "SCREENING_POLICY '{value}' does not name a known preset")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SCREENING_POLICY");
        env::remove_var("SCREENING_STRATEGY");
        env::remove_var("SCREENING_DATASET");
        env::remove_var("SCREENING_SELECT_LABEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.screening.policy_preset, "threshold_50");
        assert_eq!(config.screening.strategy, ScoringStrategyKind::Rules);
        assert!(config.screening.dataset_path.is_none());
        assert_eq!(config.screening.select_label, "Hire");
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn parses_statistical_strategy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCREENING_STRATEGY", "statistical");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.screening.strategy, ScoringStrategyKind::Statistical);
    }

    #[test]
    fn rejects_unknown_strategy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCREENING_STRATEGY", "hybrid");
        match AppConfig::load() {
            Err(ConfigError::InvalidStrategy { value }) => assert_eq!(value, "hybrid"),
            other => panic!("expected invalid strategy error, got {other:?}"),
        }
    }
}
