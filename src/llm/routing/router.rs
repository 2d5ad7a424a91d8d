//! Model router: maps a complexity score onto the flash or pro tier.

use serde::{Deserialize, Serialize};

use super::scorer::score_complexity;
use crate::llm::models::{ModelTier, fallback_model};

/// Complexity reported when routing is disabled and the text is not scored.
pub const DISABLED_COMPLEXITY: u32 = 100;

/// Configuration for the model router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether routing is enabled. When off, every task goes to pro.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Scores strictly below this go to flash, everything else to pro.
    #[serde(default = "default_simple_threshold", alias = "simpleThreshold")]
    pub simple_threshold: u32,

    /// Advisory flag for callers that display the score. Not read here.
    #[serde(default = "default_show_complexity", alias = "showComplexity")]
    pub show_complexity: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_simple_threshold() -> u32 {
    50
}

fn default_show_complexity() -> bool {
    true
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            simple_threshold: default_simple_threshold(),
            show_complexity: default_show_complexity(),
        }
    }
}

impl RoutingConfig {
    /// Defaults with `overrides` applied field by field.
    pub fn merged(overrides: &RoutingOverrides) -> Self {
        overrides.apply_to(&Self::default())
    }
}

/// Partial routing configuration. Unset fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoutingOverrides {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default, alias = "simpleThreshold")]
    pub simple_threshold: Option<u32>,
    #[serde(default, alias = "showComplexity")]
    pub show_complexity: Option<bool>,
}

impl RoutingOverrides {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn simple_threshold(mut self, threshold: u32) -> Self {
        self.simple_threshold = Some(threshold);
        self
    }

    pub fn show_complexity(mut self, show: bool) -> Self {
        self.show_complexity = Some(show);
        self
    }

    /// Layer these overrides on top of `base`.
    pub fn apply_to(&self, base: &RoutingConfig) -> RoutingConfig {
        RoutingConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            simple_threshold: self.simple_threshold.unwrap_or(base.simple_threshold),
            show_complexity: self.show_complexity.unwrap_or(base.show_complexity),
        }
    }
}

/// Result of routing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    /// Selected target.
    pub selected_model: ModelTier,
    /// Complexity score, or [`DISABLED_COMPLEXITY`] when routing is off.
    pub complexity: u32,
    /// Human-readable reason for this decision.
    pub reasoning: String,
    /// Target that was selected before a fallback hop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_model: Option<String>,
}

impl RoutingDecision {
    /// Identifier of the selected model.
    pub fn model_id(&self) -> &'static str {
        self.selected_model.model_id()
    }

    /// Decision to use after the selected target turned out to be unavailable.
    pub fn reroute(&self) -> RoutingDecision {
        let previous = self.model_id();
        let next = match fallback_model(previous) {
            id if id == ModelTier::Pro.model_id() => ModelTier::Pro,
            _ => ModelTier::Flash,
        };

        tracing::debug!(
            from = previous,
            to = next.model_id(),
            "Routing fallback"
        );

        RoutingDecision {
            selected_model: next,
            complexity: self.complexity,
            reasoning: format!(
                "{}; {} unavailable, falling back to {}",
                self.reasoning,
                previous,
                next.short_name()
            ),
            original_model: Some(previous.to_string()),
        }
    }
}

/// Model router for complexity-based tier selection.
#[derive(Debug, Clone, Default)]
pub struct ModelRouter {
    config: RoutingConfig,
}

impl ModelRouter {
    /// Create a new router with the given configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Create a router with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RoutingConfig::default())
    }

    /// Route a task to flash or pro.
    ///
    /// If routing is disabled the task text is not scored and pro is selected.
    pub fn route(&self, task: &str) -> RoutingDecision {
        if !self.config.enabled {
            tracing::debug!(model = ModelTier::Pro.model_id(), "Routing disabled");
            return RoutingDecision {
                selected_model: ModelTier::Pro,
                complexity: DISABLED_COMPLEXITY,
                reasoning: format!(
                    "Intelligent routing disabled, using {} ({})",
                    ModelTier::Pro.model_id(),
                    ModelTier::Pro.short_name()
                ),
                original_model: None,
            };
        }

        let complexity = score_complexity(task);
        let threshold = self.config.simple_threshold;

        let (tier, reasoning) = if complexity < threshold {
            (
                ModelTier::Flash,
                format!(
                    "Complexity {}% is below threshold {}%, routing to {}",
                    complexity,
                    threshold,
                    ModelTier::Flash.short_name()
                ),
            )
        } else {
            (
                ModelTier::Pro,
                format!(
                    "Complexity {}% meets threshold {}%, routing to {}",
                    complexity,
                    threshold,
                    ModelTier::Pro.short_name()
                ),
            )
        };

        tracing::debug!(
            complexity,
            threshold,
            model = tier.model_id(),
            "Task routed"
        );

        RoutingDecision {
            selected_model: tier,
            complexity,
            reasoning,
            original_model: None,
        }
    }
}

/// Route a task with per-call overrides merged over the defaults.
pub fn route_task(task: &str, overrides: &RoutingOverrides) -> RoutingDecision {
    ModelRouter::new(RoutingConfig::merged(overrides)).route(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_defaults() {
        let config = RoutingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.simple_threshold, 50);
        assert!(config.show_complexity);
    }

    #[test]
    fn test_overrides_merge_per_field() {
        let config = RoutingConfig::merged(&RoutingOverrides::default().simple_threshold(30));
        assert!(config.enabled);
        assert_eq!(config.simple_threshold, 30);
        assert!(config.show_complexity);

        let config = RoutingConfig::merged(&RoutingOverrides::default().show_complexity(false));
        assert_eq!(config.simple_threshold, 50);
        assert!(!config.show_complexity);
    }

    #[test]
    fn test_overrides_do_not_touch_base() {
        let base = RoutingConfig {
            enabled: false,
            simple_threshold: 10,
            show_complexity: false,
        };
        let merged = RoutingOverrides::default().enabled(true).apply_to(&base);
        assert!(merged.enabled);
        assert_eq!(merged.simple_threshold, 10);
        assert!(!base.enabled);
    }

    #[test]
    fn test_disabled_routes_to_pro() {
        let decision = route_task("Fix typo", &RoutingOverrides::default().enabled(false));
        assert_eq!(decision.selected_model, ModelTier::Pro);
        assert_eq!(decision.complexity, DISABLED_COMPLEXITY);
        assert!(decision.reasoning.contains("disabled"));
        assert!(decision.original_model.is_none());
    }

    #[test]
    fn test_simple_task_routes_to_flash() {
        let decision = route_task("Fix typo in README", &RoutingOverrides::default());
        assert_eq!(decision.selected_model, ModelTier::Flash);
        assert_eq!(decision.complexity, 5);
        assert!(decision.reasoning.contains("5%"));
        assert!(decision.reasoning.contains("flash"));
    }

    #[test]
    fn test_complex_task_routes_to_pro() {
        let decision = route_task(
            "Design a distributed transaction system for microservices",
            &RoutingOverrides::default(),
        );
        assert_eq!(decision.selected_model, ModelTier::Pro);
        assert_eq!(decision.model_id(), "gemini-2.5-pro");
        assert!(decision.reasoning.contains("85%"));
        assert!(decision.reasoning.contains("pro"));
    }

    #[test]
    fn test_score_equal_to_threshold_routes_to_pro() {
        // 61 chars (-5), update (-10), five file references (+15): exactly 50
        let task = "Update index.ts, config.ts, utils.ts, api.ts, and handler.ts";
        let decision = route_task(task, &RoutingOverrides::default());
        assert_eq!(decision.complexity, 50);
        assert_eq!(decision.selected_model, ModelTier::Pro);
    }

    #[test]
    fn test_empty_task_routes_to_pro_at_default_threshold() {
        let decision = route_task("", &RoutingOverrides::default());
        assert_eq!(decision.complexity, 50);
        assert_eq!(decision.selected_model, ModelTier::Pro);
    }

    #[test]
    fn test_threshold_changes_target() {
        // implement (+10), 44 chars (-15): 45
        let task = "Implement the handler for the request queue";
        let low = route_task(task, &RoutingOverrides::default().simple_threshold(30));
        let high = route_task(task, &RoutingOverrides::default().simple_threshold(70));
        assert_eq!(low.complexity, 45);
        assert_eq!(low.selected_model, ModelTier::Pro);
        assert_eq!(high.selected_model, ModelTier::Flash);
    }

    #[test]
    fn test_extreme_thresholds() {
        let task = "Redesign the whole architecture";
        let never_flash = route_task(task, &RoutingOverrides::default().simple_threshold(0));
        assert_eq!(never_flash.selected_model, ModelTier::Pro);
        let always_flash = route_task(task, &RoutingOverrides::default().simple_threshold(101));
        assert_eq!(always_flash.selected_model, ModelTier::Flash);
    }

    #[test]
    fn test_route_is_stable() {
        let router = ModelRouter::with_defaults();
        let task = "Analyze the login flow and add a test";
        let first = router.route(task);
        for _ in 0..2 {
            let again = router.route(task);
            assert_eq!(again.selected_model, first.selected_model);
            assert_eq!(again.complexity, first.complexity);
        }
    }

    #[test]
    fn test_reroute_flash_to_pro() {
        let decision = route_task("Fix typo in README", &RoutingOverrides::default());
        let rerouted = decision.reroute();
        assert_eq!(rerouted.selected_model, ModelTier::Pro);
        assert_eq!(rerouted.original_model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(rerouted.complexity, decision.complexity);
        assert!(rerouted.reasoning.contains("falling back to pro"));
    }

    #[test]
    fn test_reroute_pro_to_flash() {
        let decision = route_task("", &RoutingOverrides::default().enabled(false));
        let rerouted = decision.reroute();
        assert_eq!(rerouted.selected_model, ModelTier::Flash);
        assert_eq!(rerouted.original_model.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_decision_json_shape() {
        let decision = route_task("Fix typo in README", &RoutingOverrides::default());
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["selectedModel"], "gemini-2.5-flash");
        assert_eq!(json["complexity"], 5);
        assert!(json.get("originalModel").is_none());

        let json = serde_json::to_value(decision.reroute()).unwrap();
        assert_eq!(json["originalModel"], "gemini-2.5-flash");
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: RoutingConfig = toml::from_str("simple_threshold = 65").unwrap();
        assert!(config.enabled);
        assert_eq!(config.simple_threshold, 65);
        assert!(config.show_complexity);
    }

    #[test]
    fn test_overrides_accept_camel_case() {
        let overrides: RoutingOverrides =
            serde_json::from_str(r#"{"simpleThreshold": 30, "enabled": false}"#).unwrap();
        assert_eq!(overrides.simple_threshold, Some(30));
        assert_eq!(overrides.enabled, Some(false));
        assert_eq!(overrides.show_complexity, None);
    }

    #[test]
    #[traced_test]
    fn test_routing_is_logged() {
        let router = ModelRouter::with_defaults();
        router.route("Fix typo in README");
        assert!(logs_contain("Task routed"));
        assert!(logs_contain("gemini-2.5-flash"));
    }
}
