//! Class names the foundations toggle on the root element

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_PREFIX: &str = "indicator";

/// Event type the rendering surface fires when a CSS transition finishes
pub const TRANSITION_END_EVENT: &str = "transitionend";

/// BEM-style class table derived from a single block prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssClasses {
    /// Block class carried by every indicator root
    pub root: String,
    /// Variant marker for the sliding underline
    pub bar: String,
    /// Variant marker for the scaling icon
    pub icon: String,
    pub active: String,
    /// Suppresses transitions while the starting transform is applied
    pub no_transition: String,
    pub animating_activate: String,
    pub animating_deactivate: String,
}

impl CssClasses {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            root: prefix.to_string(),
            bar: format!("{}--bar", prefix),
            icon: format!("{}--icon", prefix),
            active: format!("{}--active", prefix),
            no_transition: format!("{}--no-transition", prefix),
            animating_activate: format!("{}--animating-activate", prefix),
            animating_deactivate: format!("{}--animating-deactivate", prefix),
        }
    }
}

impl Default for CssClasses {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }
}
