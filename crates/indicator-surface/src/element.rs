//! Element handle

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use indicator_foundation::{ClientRect, Event, EventHandler};

use crate::error::SurfaceError;
use crate::Result;

struct Node {
    tag_name: String,
    classes: Vec<String>,
    /// Inline style in declaration order
    style: Vec<(String, String)>,
    rect: ClientRect,
    listeners: Vec<(String, EventHandler)>,
    layout_flushes: u64,
    detached: bool,
}

impl Node {
    fn ensure_attached(&self) -> Result<()> {
        if self.detached {
            Err(SurfaceError::Detached)
        } else {
            Ok(())
        }
    }
}

/// Shared handle to one node. Clones refer to the same node.
///
/// Mutations, geometry reads and dispatch fail once the node is detached;
/// plain inspection (`has_class`, `style_property`, ...) keeps working.
#[derive(Clone)]
pub struct Element {
    node: Arc<RwLock<Node>>,
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Self {
            node: Arc::new(RwLock::new(Node {
                tag_name: tag_name.to_lowercase(),
                classes: Vec::new(),
                style: Vec::new(),
                rect: ClientRect::default(),
                listeners: Vec::new(),
                layout_flushes: 0,
                detached: false,
            })),
        }
    }

    /// Create an element from a space-separated class attribute
    pub fn with_classes(tag_name: &str, class_attr: &str) -> Self {
        let element = Self::new(tag_name);
        {
            let mut node = element.node.write();
            for class_name in class_attr.split_whitespace() {
                if !node.classes.iter().any(|c| c == class_name) {
                    node.classes.push(class_name.to_string());
                }
            }
        }
        element
    }

    pub fn tag_name(&self) -> String {
        self.node.read().tag_name.clone()
    }

    /// Same underlying node?
    pub fn is_same_node(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    // Class list

    pub fn add_class(&self, class_name: &str) -> Result<()> {
        validate_token(class_name)?;
        let mut node = self.node.write();
        node.ensure_attached()?;
        if !node.classes.iter().any(|c| c == class_name) {
            node.classes.push(class_name.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&self, class_name: &str) -> Result<()> {
        validate_token(class_name)?;
        let mut node = self.node.write();
        node.ensure_attached()?;
        node.classes.retain(|c| c != class_name);
        Ok(())
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.node.read().classes.iter().any(|c| c == class_name)
    }

    pub fn class_name(&self) -> String {
        self.node.read().classes.join(" ")
    }

    // Inline style

    /// Set one inline property. An empty value removes the declaration.
    pub fn set_style_property(&self, property: &str, value: &str) -> Result<()> {
        let mut node = self.node.write();
        node.ensure_attached()?;

        let property = property.trim().to_lowercase();
        if value.is_empty() {
            node.style.retain(|(name, _)| *name != property);
            return Ok(());
        }

        match node.style.iter().position(|(name, _)| *name == property) {
            Some(index) => node.style[index].1 = value.to_string(),
            None => node.style.push((property, value.to_string())),
        }
        Ok(())
    }

    pub fn style_property(&self, property: &str) -> Option<String> {
        let property = property.trim().to_lowercase();
        self.node
            .read()
            .style
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.clone())
    }

    /// Serialized inline style, e.g. `transform: scaleX(2); color: red;`
    pub fn css_text(&self) -> String {
        self.node
            .read()
            .style
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // Geometry

    /// Host layout pass: record where the element is drawn.
    pub fn set_bounding_client_rect(&self, rect: ClientRect) {
        self.node.write().rect = rect;
    }

    /// Read the laid-out rectangle. Every read counts as a layout flush.
    pub fn get_bounding_client_rect(&self) -> Result<ClientRect> {
        let mut node = self.node.write();
        node.ensure_attached()?;
        node.layout_flushes += 1;
        Ok(node.rect)
    }

    /// Number of forced layouts so far
    pub fn layout_flushes(&self) -> u64 {
        self.node.read().layout_flushes
    }

    // Events

    /// Attach a listener. The same handler added twice for one type stays a
    /// single listener.
    pub fn add_event_listener(&self, event_type: &str, handler: EventHandler) -> Result<()> {
        let mut node = self.node.write();
        node.ensure_attached()?;

        let exists = node
            .listeners
            .iter()
            .any(|(t, h)| t == event_type && Arc::ptr_eq(h, &handler));
        if !exists {
            node.listeners.push((event_type.to_string(), handler));
        }
        Ok(())
    }

    /// Detach a listener. Unknown handlers are ignored.
    pub fn remove_event_listener(&self, event_type: &str, handler: &EventHandler) -> Result<()> {
        let mut node = self.node.write();
        node.ensure_attached()?;
        node.listeners
            .retain(|(t, h)| !(t == event_type && Arc::ptr_eq(h, handler)));
        Ok(())
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.node
            .read()
            .listeners
            .iter()
            .filter(|(t, _)| t == event_type)
            .count()
    }

    /// Deliver an event to the listeners registered when dispatch starts.
    ///
    /// Listeners run without the node lock held, so they may mutate the
    /// element. Returns how many listeners were invoked.
    pub fn dispatch_event(&self, event_type: &str) -> Result<usize> {
        let listeners: Vec<EventHandler> = {
            let node = self.node.read();
            node.ensure_attached()?;
            node.listeners
                .iter()
                .filter(|(t, _)| t == event_type)
                .map(|(_, h)| Arc::clone(h))
                .collect()
        };

        let event = Event::new(event_type);
        for listener in &listeners {
            listener(&event);
        }

        tracing::trace!(event = event_type, listeners = listeners.len(), "Dispatched event");

        Ok(listeners.len())
    }

    /// Remove the node from its document. Listeners are dropped with it.
    pub fn detach(&self) {
        let mut node = self.node.write();
        node.detached = true;
        node.listeners.clear();
        tracing::debug!(tag = %node.tag_name, "Element detached");
    }

    pub fn is_detached(&self) -> bool {
        self.node.read().detached
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.read();
        f.debug_struct("Element")
            .field("tag_name", &node.tag_name)
            .field("classes", &node.classes)
            .field("style", &node.style)
            .field("rect", &node.rect)
            .field("listeners", &node.listeners.len())
            .field("detached", &node.detached)
            .finish()
    }
}

fn validate_token(class_name: &str) -> Result<()> {
    if class_name.is_empty() || class_name.chars().any(char::is_whitespace) {
        return Err(SurfaceError::InvalidToken(class_name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler() -> (EventHandler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handler: EventHandler = Arc::new(move |_: &Event| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (handler, count)
    }

    #[test]
    fn test_class_list() {
        let element = Element::with_classes("SPAN", "indicator indicator--bar indicator");
        assert_eq!(element.tag_name(), "span");
        assert_eq!(element.class_name(), "indicator indicator--bar");

        element.add_class("foo").unwrap();
        element.add_class("foo").unwrap();
        assert_eq!(element.class_name(), "indicator indicator--bar foo");

        element.remove_class("foo").unwrap();
        element.remove_class("foo").unwrap();
        assert!(!element.has_class("foo"));
    }

    #[test]
    fn test_invalid_class_tokens() {
        let element = Element::new("span");
        assert_eq!(
            element.add_class(""),
            Err(SurfaceError::InvalidToken(String::new()))
        );
        assert!(element.remove_class("a b").is_err());
    }

    #[test]
    fn test_inline_style() {
        let element = Element::new("span");

        element.set_style_property("background-color", "red").unwrap();
        element.set_style_property("transform", "scaleX(2)").unwrap();
        element.set_style_property("background-color", "blue").unwrap();
        assert_eq!(
            element.css_text(),
            "background-color: blue; transform: scaleX(2);"
        );

        element.set_style_property("transform", "").unwrap();
        assert_eq!(element.style_property("transform"), None);
        assert_eq!(
            element.style_property("Background-Color"),
            Some("blue".to_string())
        );
    }

    #[test]
    fn test_geometry_reads_flush_layout() {
        let element = Element::new("span");
        let rect = ClientRect::new(0.0, 10.0, 100.0, 2.0);
        element.set_bounding_client_rect(rect);

        assert_eq!(element.get_bounding_client_rect().unwrap(), rect);
        assert_eq!(element.get_bounding_client_rect().unwrap(), rect);
        assert_eq!(element.layout_flushes(), 2);
    }

    #[test]
    fn test_listeners_are_deduplicated() {
        let element = Element::new("span");
        let (handler, count) = counting_handler();

        element
            .add_event_listener("transitionend", Arc::clone(&handler))
            .unwrap();
        element
            .add_event_listener("transitionend", Arc::clone(&handler))
            .unwrap();

        assert_eq!(element.dispatch_event("transitionend").unwrap(), 1);
        assert_eq!(element.dispatch_event("click").unwrap(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_listener() {
        let element = Element::new("span");
        let (handler, count) = counting_handler();
        let (stranger, _) = counting_handler();

        element
            .add_event_listener("transitionend", Arc::clone(&handler))
            .unwrap();
        element
            .remove_event_listener("transitionend", &stranger)
            .unwrap();
        element.remove_event_listener("click", &handler).unwrap();
        assert_eq!(element.listener_count("transitionend"), 1);

        element
            .remove_event_listener("transitionend", &handler)
            .unwrap();
        element.dispatch_event("transitionend").unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_may_mutate_element() {
        let element = Element::new("span");
        let target = element.clone();
        let handler: EventHandler = Arc::new(move |_: &Event| {
            let _ = target.add_class("done");
        });

        element.add_event_listener("transitionend", handler).unwrap();
        element.dispatch_event("transitionend").unwrap();

        assert!(element.has_class("done"));
    }

    #[test]
    fn test_detached_element() {
        let element = Element::with_classes("span", "indicator");
        let (handler, _) = counting_handler();
        element.add_event_listener("transitionend", handler).unwrap();

        element.detach();

        assert!(element.is_detached());
        assert_eq!(element.add_class("x"), Err(SurfaceError::Detached));
        assert_eq!(
            element.get_bounding_client_rect(),
            Err(SurfaceError::Detached)
        );
        assert_eq!(
            element.dispatch_event("transitionend"),
            Err(SurfaceError::Detached)
        );
        assert!(element.has_class("indicator"));
        assert_eq!(element.listener_count("transitionend"), 0);
    }

    #[test]
    fn test_clones_share_node() {
        let element = Element::new("span");
        let other = element.clone();
        other.add_class("shared").unwrap();

        assert!(element.has_class("shared"));
        assert!(element.is_same_node(&other));
        assert!(!element.is_same_node(&Element::new("span")));
    }
}
