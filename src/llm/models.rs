//! Model tiers and identifier policy.
//!
//! Two canonical targets exist: a fast/cheap tier and a slower, more capable
//! tier. Anything else is opaque to the router and only flows through
//! [`is_routable`] and [`fallback_model`].

use serde::{Deserialize, Serialize};

/// Identifier of the fast tier.
pub const FLASH_MODEL: &str = "gemini-2.5-flash";

/// Identifier of the capable tier.
pub const PRO_MODEL: &str = "gemini-2.5-pro";

/// Generation prefix shared by every model that routing is defined for.
const ROUTABLE_FAMILY_PREFIX: &str = "gemini-2.5";

/// Legacy hybrid model that predates the 2.5 family but still routes.
const LEGACY_THINKING_MODEL: &str = "gemini-2.0-flash-thinking-exp-01-21";

/// Target tier selected by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelTier {
    /// Cheap, low-latency model for simple tasks.
    #[serde(rename = "gemini-2.5-flash")]
    Flash,
    /// Capable model for complex tasks, and the default when routing is off.
    #[serde(rename = "gemini-2.5-pro")]
    Pro,
}

impl ModelTier {
    /// Full model identifier handed to the invocation layer.
    pub fn model_id(self) -> &'static str {
        match self {
            ModelTier::Flash => FLASH_MODEL,
            ModelTier::Pro => PRO_MODEL,
        }
    }

    /// Short name used in reasoning text.
    pub fn short_name(self) -> &'static str {
        match self {
            ModelTier::Flash => "flash",
            ModelTier::Pro => "pro",
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.model_id())
    }
}

impl std::str::FromStr for ModelTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FLASH_MODEL | "flash" => Ok(ModelTier::Flash),
            PRO_MODEL | "pro" => Ok(ModelTier::Pro),
            _ => Err(format!(
                "unknown model tier '{}', expected one of: {}, {}, flash, pro",
                s, FLASH_MODEL, PRO_MODEL
            )),
        }
    }
}

/// Whether intelligent routing is defined for `model_id`.
///
/// Exact, case-sensitive comparison: the 2.5 family by prefix, plus the one
/// legacy thinking model by full identifier.
pub fn is_routable(model_id: &str) -> bool {
    model_id.starts_with(ROUTABLE_FAMILY_PREFIX) || model_id == LEGACY_THINKING_MODEL
}

/// Alternate target to try when `requested` is unavailable.
///
/// Only the flash identifier maps to pro; everything else, pro included,
/// falls back to flash.
pub fn fallback_model(requested: &str) -> &'static str {
    if requested == FLASH_MODEL {
        PRO_MODEL
    } else {
        FLASH_MODEL
    }
}
