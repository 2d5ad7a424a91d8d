//! Heuristic model routing for coding-assistant tasks.
//!
//! Scores the text of a task request for complexity and picks between a
//! fast/cheap model tier (flash) and a slower, more capable one (pro).
//! Everything in the routing core is pure and synchronous; settings,
//! environment and model invocation live in the surrounding modules.
//!
//! ```rust
//! use task_router::{RoutingOverrides, fallback_model, is_routable, route_task, score_complexity};
//!
//! assert_eq!(score_complexity(""), 50);
//!
//! let decision = route_task("Fix typo in README", &RoutingOverrides::default());
//! assert_eq!(decision.model_id(), "gemini-2.5-flash");
//!
//! assert!(is_routable("gemini-2.5-pro"));
//! assert_eq!(fallback_model("gemini-2.5-flash"), "gemini-2.5-pro");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod settings;

pub use error::{ConfigError, LlmError};
pub use llm::routing::{
    ModelRouter, RoutingConfig, RoutingDecision, RoutingOverrides, ScoreBreakdown, route_task,
    score_complexity, score_complexity_breakdown,
};
pub use llm::{ModelTier, fallback_model, is_routable};
