//! Runtime configuration.
//!
//! Resolution order for every routing field: CLI flag > environment >
//! settings file > built-in default. The result is an immutable
//! [`RoutingConfig`] snapshot handed to the router.

mod routing;

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::llm::routing::{RoutingConfig, RoutingOverrides};
use crate::settings::Settings;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings file that was consulted (it may not exist).
    pub settings_path: PathBuf,
    /// Routing snapshot.
    pub routing: RoutingConfig,
}

impl Config {
    /// Resolve configuration.
    ///
    /// `settings_path` falls back to [`Settings::default_path`]. `overrides`
    /// carries per-invocation values (CLI flags) and wins over everything.
    pub fn load(
        settings_path: Option<PathBuf>,
        overrides: &RoutingOverrides,
    ) -> Result<Self, ConfigError> {
        let settings_path = match settings_path {
            Some(path) => path,
            None => Settings::default_path()?,
        };
        let settings = Settings::load_from(&settings_path)?;
        let routing = overrides.apply_to(&routing::resolve(&settings)?);

        tracing::debug!(
            path = %settings_path.display(),
            enabled = routing.enabled,
            simple_threshold = routing.simple_threshold,
            show_complexity = routing.show_complexity,
            "Configuration resolved"
        );

        Ok(Self {
            settings_path,
            routing,
        })
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}
