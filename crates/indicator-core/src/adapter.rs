//! Adapter binding a foundation to an [`Element`]

use indicator_foundation::{Adapter, AdapterError, ClientRect, EventHandler};
use indicator_surface::Element;

/// Thin pass-through from the foundation's capability set to the root element.
#[derive(Debug, Clone)]
pub struct ElementAdapter {
    root: Element,
}

impl ElementAdapter {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl Adapter for ElementAdapter {
    fn add_class(&self, class_name: &str) -> indicator_foundation::Result<()> {
        self.root
            .add_class(class_name)
            .map_err(AdapterError::surface)
    }

    fn remove_class(&self, class_name: &str) -> indicator_foundation::Result<()> {
        self.root
            .remove_class(class_name)
            .map_err(AdapterError::surface)
    }

    fn register_event_handler(
        &self,
        event_type: &str,
        handler: EventHandler,
    ) -> indicator_foundation::Result<()> {
        self.root
            .add_event_listener(event_type, handler)
            .map_err(AdapterError::surface)
    }

    fn deregister_event_handler(
        &self,
        event_type: &str,
        handler: &EventHandler,
    ) -> indicator_foundation::Result<()> {
        self.root
            .remove_event_listener(event_type, handler)
            .map_err(AdapterError::surface)
    }

    fn get_client_rect(&self) -> indicator_foundation::Result<ClientRect> {
        self.root
            .get_bounding_client_rect()
            .map_err(AdapterError::surface)
    }

    fn set_style_property(&self, property: &str, value: &str) -> indicator_foundation::Result<()> {
        self.root
            .set_style_property(property, value)
            .map_err(AdapterError::surface)
    }
}
