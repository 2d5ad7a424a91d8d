//! Persisted user settings.
//!
//! Stored as TOML. Every field is optional so a file only needs the values
//! the user actually changed:
//!
//! ```toml
//! [routing]
//! simple_threshold = 60
//! show_complexity = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::llm::routing::RoutingOverrides;

/// Directory name under the platform config dir.
const SETTINGS_DIR: &str = "task-router";

const SETTINGS_FILE: &str = "settings.toml";

/// User settings as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Routing preferences. Unset fields fall back to the built-in defaults.
    #[serde(default)]
    pub routing: RoutingOverrides,
}

impl Settings {
    /// Default settings path: `<config_dir>/task-router/settings.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
            .ok_or_else(|| ConfigError::MissingRequired {
                key: "TASK_ROUTER_SETTINGS".to_string(),
                hint: "No platform config directory found; pass --settings or set TASK_ROUTER_SETTINGS"
                    .to_string(),
            })
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e))
        })
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_routing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[routing]
simple_threshold = 65
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.routing.simple_threshold, Some(65));
        assert_eq!(settings.routing.enabled, None);
        assert_eq!(settings.routing.show_complexity, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[routing]\nsimple_threshold = \"high\"\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "got: {err}");
        assert!(err.to_string().contains("settings.toml"), "got: {err}");
    }

    #[test]
    fn test_camel_case_routing_keys() {
        let settings =
            Settings::from_toml("[routing]\nenabled = false\nsimpleThreshold = 40\n").unwrap();
        assert_eq!(
            settings,
            Settings {
                routing: RoutingOverrides::default()
                    .enabled(false)
                    .simple_threshold(40),
            }
        );
    }
}
