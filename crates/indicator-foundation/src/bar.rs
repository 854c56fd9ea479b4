//! Bar indicator
//!
//! The underline slides from the previously active tab to the new one. Both
//! tabs' final positions are never known at the same time, so the bar is
//! first drawn at its new position, transformed back over the old one with
//! transitions disabled, and then released so the platform animates it to
//! the identity transform.

use std::sync::{Arc, Weak};

use crate::adapter::{Adapter, Event, EventHandler};
use crate::classes::{CssClasses, TRANSITION_END_EVENT};
use crate::foundation::{Foundation, Shared};
use crate::geometry::{ClientRect, IndicatorBounds, IndicatorTransform};
use crate::state::IndicatorState;
use crate::Result;

const TRANSFORM_PROPERTY: &str = "transform";

pub struct BarFoundation {
    shared: Arc<Shared>,
    transition_event: String,
    /// Transition-end listener while initialized
    handler: Option<EventHandler>,
}

impl BarFoundation {
    pub fn new(adapter: Box<dyn Adapter>, classes: CssClasses) -> Self {
        Self {
            shared: Arc::new(Shared::new(adapter, classes, "bar")),
            transition_event: TRANSITION_END_EVENT.to_string(),
            handler: None,
        }
    }

    /// Listen for a different transition-finished event type
    pub fn with_transition_event(mut self, event_type: impl Into<String>) -> Self {
        self.transition_event = event_type.into();
        self
    }

    pub fn adapter(&self) -> &dyn Adapter {
        self.shared.adapter.as_ref()
    }

    /// Settle whichever animation just finished.
    fn handle_transition_end(shared: &Shared) -> Result<()> {
        let state = shared.state();
        if !state.is_transitioning() {
            return Ok(());
        }

        if state == IndicatorState::Activating {
            shared
                .adapter
                .remove_class(&shared.classes.animating_activate)?;
            shared.transition(IndicatorState::Active)
        } else {
            shared
                .adapter
                .remove_class(&shared.classes.animating_deactivate)?;
            shared.transition(IndicatorState::Inactive)
        }
    }

    /// Show the bar at rest, dropping any slide still in flight.
    fn settle_active(&self) -> Result<()> {
        if self.shared.state() == IndicatorState::Activating {
            self.shared
                .adapter
                .remove_class(&self.shared.classes.animating_activate)?;
        }
        self.shared.transition(IndicatorState::Active)
    }

    fn transition_end_handler(shared: Weak<Shared>) -> EventHandler {
        Arc::new(move |event: &Event| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            if let Err(err) = Self::handle_transition_end(&shared) {
                tracing::warn!(
                    event = event.event_type(),
                    error = %err,
                    "Failed to settle indicator transition"
                );
            }
        })
    }

    /// Slide from `previous` to wherever the bar is now drawn.
    fn slide_from(&self, previous: IndicatorBounds) -> Result<()> {
        let adapter = self.shared.adapter.as_ref();
        let classes = &self.shared.classes;

        let current = adapter.get_client_rect()?.bounds();
        let Some(transform) = IndicatorTransform::between(previous, current) else {
            tracing::warn!(
                width = current.width,
                "Indicator has no usable width, activating without slide"
            );
            return self.settle_active();
        };
        if transform.is_identity() {
            return self.settle_active();
        }

        adapter.add_class(&classes.no_transition)?;
        adapter.set_style_property(TRANSFORM_PROPERTY, &transform.to_string())?;

        // Required ordering: the starting transform has to be laid out before
        // it is cleared, or the two style writes coalesce and nothing animates.
        adapter.get_client_rect()?;

        adapter.remove_class(&classes.no_transition)?;
        adapter.add_class(&classes.animating_activate)?;
        adapter.set_style_property(TRANSFORM_PROPERTY, "")?;

        self.shared.transition(IndicatorState::Activating)
    }
}

impl Foundation for BarFoundation {
    fn init(&mut self) -> Result<()> {
        if self.handler.is_some() {
            return Ok(());
        }

        let handler = Self::transition_end_handler(Arc::downgrade(&self.shared));
        self.shared
            .adapter
            .register_event_handler(&self.transition_event, Arc::clone(&handler))?;
        self.handler = Some(handler);
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        if let Some(handler) = &self.handler {
            self.shared
                .adapter
                .deregister_event_handler(&self.transition_event, handler)?;
            self.handler = None;
        }
        Ok(())
    }

    fn activate(&mut self, previous: Option<IndicatorBounds>) -> Result<()> {
        let adapter = self.shared.adapter.as_ref();
        let classes = &self.shared.classes;

        if self.shared.state() == IndicatorState::Deactivating {
            adapter.remove_class(&classes.animating_deactivate)?;
        }
        adapter.add_class(&classes.active)?;

        match previous {
            Some(previous) => self.slide_from(previous),
            None => self.settle_active(),
        }
    }

    fn deactivate(&mut self) -> Result<()> {
        let adapter = self.shared.adapter.as_ref();
        let classes = &self.shared.classes;
        let from = self.shared.state();

        if from == IndicatorState::Activating {
            adapter.remove_class(&classes.animating_activate)?;
        }
        adapter.remove_class(&classes.active)?;

        if from.is_active() {
            adapter.add_class(&classes.animating_deactivate)?;
            self.shared.transition(IndicatorState::Deactivating)?;
        }
        Ok(())
    }

    fn get_client_rect(&self) -> Result<ClientRect> {
        self.shared.adapter.get_client_rect()
    }

    fn state(&self) -> IndicatorState {
        self.shared.state()
    }

    fn variant_name(&self) -> &'static str {
        "bar"
    }
}
