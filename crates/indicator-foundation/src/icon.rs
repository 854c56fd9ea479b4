//! Icon indicator
//!
//! Icons scale and fade purely through the active class. Only one icon is
//! ever visible, so there is no geometry to carry between tabs.

use crate::adapter::Adapter;
use crate::classes::CssClasses;
use crate::foundation::{Foundation, Shared};
use crate::geometry::{ClientRect, IndicatorBounds};
use crate::state::IndicatorState;
use crate::Result;

pub struct IconFoundation {
    shared: Shared,
}

impl IconFoundation {
    pub fn new(adapter: Box<dyn Adapter>, classes: CssClasses) -> Self {
        Self {
            shared: Shared::new(adapter, classes, "icon"),
        }
    }

    pub fn adapter(&self) -> &dyn Adapter {
        self.shared.adapter.as_ref()
    }
}

impl Foundation for IconFoundation {
    /// The previous bounds are accepted so both variants share one signature,
    /// but an icon never slides.
    fn activate(&mut self, _previous: Option<IndicatorBounds>) -> Result<()> {
        self.shared.adapter.add_class(&self.shared.classes.active)?;
        self.shared.transition(IndicatorState::Active)
    }

    fn deactivate(&mut self) -> Result<()> {
        self.shared
            .adapter
            .remove_class(&self.shared.classes.active)?;
        self.shared.transition(IndicatorState::Inactive)
    }

    fn get_client_rect(&self) -> Result<ClientRect> {
        self.shared.adapter.get_client_rect()
    }

    fn state(&self) -> IndicatorState {
        self.shared.state()
    }

    fn variant_name(&self) -> &'static str {
        "icon"
    }
}
