//! Complexity-based model routing.
//!
//! Picks between the fast and the capable model tier for each task.
//!
//! # Architecture
//!
//! ```text
//! Task text
//!      │
//!      ▼
//! ┌──────────────────┐
//! │  Routing enabled? │  ← no: pro, complexity 100
//! └────────┬─────────┘
//!          │ yes
//!          ▼
//! ┌──────────────────┐
//! │ Complexity Scorer │  ← keywords, length, files, lists, code
//! └────────┬─────────┘
//!          │ score 0-100
//!          ▼
//! ┌──────────────────┐
//! │ Threshold (< 50)  │  ← below: flash, otherwise: pro
//! └────────┬─────────┘
//!          │
//!          ▼
//!   RoutingDecision
//! ```
//!
//! # Usage
//!
//! ```rust
//! use task_router::llm::routing::{ModelRouter, RoutingConfig};
//!
//! let router = ModelRouter::new(RoutingConfig::default());
//! let decision = router.route("Fix typo in README");
//!
//! assert_eq!(decision.model_id(), "gemini-2.5-flash");
//! ```

mod router;
mod scorer;

pub use router::{
    DISABLED_COMPLEXITY, ModelRouter, RoutingConfig, RoutingDecision, RoutingOverrides, route_task,
};
pub use scorer::{NEUTRAL_SCORE, ScoreBreakdown, score_complexity, score_complexity_breakdown};
