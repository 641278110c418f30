use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter directives '{directives}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Filter applied when `RUST_LOG` is unset: the configured level for the
/// screening crates, `info` for everything else, so a `debug` deployment does
/// not also drown in hyper/tokio internals.
fn fallback_directives(log_level: &str) -> String {
    let level = log_level.trim();
    format!("info,resume_screen={level},resume_screen_api={level}")
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = fallback_directives(&config.log_level);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
                directives,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_directives_scope_the_screening_crates() {
        let directives = fallback_directives("debug");
        assert_eq!(
            directives,
            "info,resume_screen=debug,resume_screen_api=debug"
        );
        EnvFilter::try_new(&directives).expect("directives parse");
    }

    #[test]
    fn fallback_directives_trim_configured_levels() {
        let directives = fallback_directives(" warn ");
        assert_eq!(directives, "info,resume_screen=warn,resume_screen_api=warn");
    }
}
