//! Routing section of the resolved config.

use crate::config::parse_optional_env;
use crate::error::ConfigError;
use crate::llm::routing::RoutingConfig;
use crate::settings::Settings;

/// Resolve routing config: env var > settings file > built-in default.
pub(crate) fn resolve(settings: &Settings) -> Result<RoutingConfig, ConfigError> {
    let base = settings.routing.apply_to(&RoutingConfig::default());

    let config = RoutingConfig {
        enabled: parse_optional_env("ROUTING_ENABLED", base.enabled)?,
        simple_threshold: parse_optional_env("ROUTING_SIMPLE_THRESHOLD", base.simple_threshold)?,
        show_complexity: parse_optional_env("ROUTING_SHOW_COMPLEXITY", base.show_complexity)?,
    };

    if config.simple_threshold > 100 {
        tracing::warn!(
            threshold = config.simple_threshold,
            "simple_threshold above 100, every task will route to flash"
        );
    }

    Ok(config)
}
