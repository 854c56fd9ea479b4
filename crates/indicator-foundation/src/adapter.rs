//! Capability interface between a foundation and its rendering surface
//!
//! A foundation touches the surface through these operations and nothing
//! else, which is what lets it run against a recording double in tests.

use std::sync::Arc;

use crate::geometry::ClientRect;
use crate::Result;

/// An event delivered to a registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_type: String,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// Listener callback. Identity is the `Arc` allocation: deregistering needs
/// the same handle that was registered.
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

pub trait Adapter: Send + Sync {
    /// Add a class to the root. Adding a present class is a no-op.
    fn add_class(&self, class_name: &str) -> Result<()>;

    /// Remove a class from the root. Removing an absent class is a no-op.
    fn remove_class(&self, class_name: &str) -> Result<()>;

    /// Attach `handler` for `event_type`. Registering the same handler twice
    /// leaves a single listener.
    fn register_event_handler(&self, event_type: &str, handler: EventHandler) -> Result<()>;

    /// Detach a handler previously registered for `event_type`; unknown
    /// handlers are ignored.
    fn deregister_event_handler(&self, event_type: &str, handler: &EventHandler) -> Result<()>;

    /// Current rendered geometry of the root. Reading it forces layout.
    fn get_client_rect(&self) -> Result<ClientRect>;

    /// Write one inline style property; an empty value clears it.
    fn set_style_property(&self, property: &str, value: &str) -> Result<()>;
}
