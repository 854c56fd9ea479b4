//! Contract shared by the bar and icon foundations

use parking_lot::Mutex;

use crate::adapter::Adapter;
use crate::classes::CssClasses;
use crate::error::AdapterError;
use crate::geometry::{ClientRect, IndicatorBounds};
use crate::state::IndicatorState;
use crate::Result;

/// Behaviour every indicator variant exposes to its component.
///
/// A foundation is bound to one adapter when it is constructed and keeps it
/// for its whole lifetime.
pub trait Foundation: Send {
    /// Hook the foundation up to surface events. Idempotent.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Undo everything `init` registered.
    fn destroy(&mut self) -> Result<()> {
        Ok(())
    }

    /// Show the indicator. `previous` is the extent of the indicator being
    /// left behind, or `None` when no prior position is known.
    fn activate(&mut self, previous: Option<IndicatorBounds>) -> Result<()>;

    /// Hide the indicator. Calling it on an inactive indicator is a no-op.
    fn deactivate(&mut self) -> Result<()>;

    fn get_client_rect(&self) -> Result<ClientRect>;

    fn state(&self) -> IndicatorState;

    /// Variant name for diagnostics (`"bar"` or `"icon"`)
    fn variant_name(&self) -> &'static str;
}

/// Adapter plus the bits of state a foundation shares with its event handlers.
pub(crate) struct Shared {
    pub(crate) adapter: Box<dyn Adapter>,
    pub(crate) classes: CssClasses,
    variant: &'static str,
    state: Mutex<IndicatorState>,
}

impl Shared {
    pub(crate) fn new(
        adapter: Box<dyn Adapter>,
        classes: CssClasses,
        variant: &'static str,
    ) -> Self {
        Self {
            adapter,
            classes,
            variant,
            state: Mutex::new(IndicatorState::Inactive),
        }
    }

    pub(crate) fn state(&self) -> IndicatorState {
        *self.state.lock()
    }

    pub(crate) fn transition(&self, to: IndicatorState) -> Result<()> {
        let mut state = self.state.lock();
        if *state == to {
            return Ok(());
        }

        if !state.can_transition_to(to) {
            return Err(AdapterError::InvalidTransition {
                from: (*state).to_string(),
                to: to.to_string(),
            });
        }

        tracing::debug!(
            variant = self.variant,
            from = %*state,
            to = %to,
            "Indicator state transition"
        );

        *state = to;
        Ok(())
    }
}
