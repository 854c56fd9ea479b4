//! Indicator State Machine
//!
//! ```text
//! Inactive
//!   ↓ activate(previous bounds)
//! Activating ──transition end──→ Active
//!   ↓ deactivate                   ↓ deactivate
//! Deactivating ──transition end──→ Inactive
//! ```
//!
//! `activate(None)` jumps straight to `Active`. The icon variant only ever
//! moves between `Inactive` and `Active`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorState {
    /// Not shown
    #[default]
    Inactive,
    /// Active class set, sliding in from the previous tab's position
    Activating,
    /// Shown at rest
    Active,
    /// Active class removed, exit transition still running
    Deactivating,
}

impl IndicatorState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: IndicatorState) -> bool {
        use IndicatorState::*;

        match (self, target) {
            (Inactive, Activating) | (Inactive, Active) => true,
            (Activating, Active) | (Activating, Deactivating) => true,
            // Tab-to-tab re-activation, or icon deactivation
            (Active, Activating) | (Active, Deactivating) | (Active, Inactive) => true,
            (Deactivating, Inactive) | (Deactivating, Activating) | (Deactivating, Active) => true,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    /// True while the active class is present on the root
    pub fn is_active(&self) -> bool {
        matches!(self, IndicatorState::Activating | IndicatorState::Active)
    }

    /// True while waiting on a transition-end event
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self,
            IndicatorState::Activating | IndicatorState::Deactivating
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorState::Inactive => "inactive",
            IndicatorState::Activating => "activating",
            IndicatorState::Active => "active",
            IndicatorState::Deactivating => "deactivating",
        }
    }
}

impl std::fmt::Display for IndicatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IndicatorState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inactive" => Ok(IndicatorState::Inactive),
            "activating" => Ok(IndicatorState::Activating),
            "active" => Ok(IndicatorState::Active),
            "deactivating" => Ok(IndicatorState::Deactivating),
            _ => Err(format!("Unknown indicator state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        use IndicatorState::*;

        // Full bar cycle
        assert!(Inactive.can_transition_to(Activating));
        assert!(Activating.can_transition_to(Active));
        assert!(Active.can_transition_to(Deactivating));
        assert!(Deactivating.can_transition_to(Inactive));
        // First activation without a previous position
        assert!(Inactive.can_transition_to(Active));
        // Icon toggle
        assert!(Active.can_transition_to(Inactive));
        // Re-activated before the exit transition finished
        assert!(Deactivating.can_transition_to(Activating));
    }

    #[test]
    fn test_invalid_transitions() {
        use IndicatorState::*;

        assert!(!Inactive.can_transition_to(Deactivating));
        assert!(!Activating.can_transition_to(Inactive));
    }

    #[test]
    fn test_parse_round_trip() {
        for state in [
            IndicatorState::Inactive,
            IndicatorState::Activating,
            IndicatorState::Active,
            IndicatorState::Deactivating,
        ] {
            assert_eq!(state.as_str().parse::<IndicatorState>(), Ok(state));
        }
        assert!("sliding".parse::<IndicatorState>().is_err());
    }

    #[test]
    fn test_activity() {
        assert!(IndicatorState::Activating.is_active());
        assert!(IndicatorState::Active.is_active());
        assert!(!IndicatorState::Deactivating.is_active());
        assert!(IndicatorState::Deactivating.is_transitioning());
        assert!(!IndicatorState::default().is_active());
    }
}
