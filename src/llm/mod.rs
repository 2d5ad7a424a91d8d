//! Model selection for coding-assistant tasks.
//!
//! - [`routing`]: complexity scoring and the flash/pro decision
//! - [`models`]: tier identifiers, the routable-model gate and fallback mapping
//! - [`failover`]: dispatch through a caller's backend with one fallback hop

pub mod failover;
pub mod models;
pub mod routing;

pub use failover::{Dispatched, FallbackDispatcher, ModelBackend};
pub use models::{FLASH_MODEL, ModelTier, PRO_MODEL, fallback_model, is_routable};
