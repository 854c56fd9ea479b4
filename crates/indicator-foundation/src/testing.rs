//! Recording adapter double for foundation tests

use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

use crate::adapter::{Adapter, Event, EventHandler};
use crate::error::AdapterError;
use crate::geometry::ClientRect;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    AddClass(String),
    RemoveClass(String),
    RegisterEventHandler(String),
    DeregisterEventHandler(String),
    GetClientRect,
    SetStyleProperty(String, String),
}

#[derive(Error, Debug)]
#[error("{0}")]
pub struct FakeSurfaceError(String);

#[derive(Default)]
struct Recorded {
    calls: Vec<AdapterCall>,
    classes: Vec<String>,
    rect: ClientRect,
    handlers: Vec<(String, EventHandler)>,
    failure: Option<String>,
}

/// Adapter that remembers every call and keeps just enough state (classes,
/// handlers, a fixed rect) to observe a foundation's effects.
#[derive(Clone, Default)]
pub struct RecordingAdapter {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.inner.lock().classes.iter().any(|c| c == class_name)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.lock().classes.clone()
    }

    pub fn set_rect(&self, rect: ClientRect) {
        self.inner.lock().rect = rect;
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        self.inner.lock().failure = Some(message.to_string());
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.inner
            .lock()
            .handlers
            .iter()
            .filter(|(t, _)| t == event_type)
            .count()
    }

    /// Fire `event_type` at every matching handler, outside the lock.
    pub fn emit(&self, event_type: &str) -> usize {
        let handlers: Vec<EventHandler> = self
            .inner
            .lock()
            .handlers
            .iter()
            .filter(|(t, _)| t == event_type)
            .map(|(_, h)| Arc::clone(h))
            .collect();

        let event = Event::new(event_type);
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    fn record(&self, call: AdapterCall) -> Result<()> {
        let mut inner = self.inner.lock();
        if let Some(message) = &inner.failure {
            return Err(AdapterError::surface(FakeSurfaceError(message.clone())));
        }
        inner.calls.push(call);
        Ok(())
    }
}

impl Adapter for RecordingAdapter {
    fn add_class(&self, class_name: &str) -> Result<()> {
        self.record(AdapterCall::AddClass(class_name.to_string()))?;
        let mut inner = self.inner.lock();
        if !inner.classes.iter().any(|c| c == class_name) {
            inner.classes.push(class_name.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class_name: &str) -> Result<()> {
        self.record(AdapterCall::RemoveClass(class_name.to_string()))?;
        self.inner.lock().classes.retain(|c| c != class_name);
        Ok(())
    }

    fn register_event_handler(&self, event_type: &str, handler: EventHandler) -> Result<()> {
        self.record(AdapterCall::RegisterEventHandler(event_type.to_string()))?;
        let mut inner = self.inner.lock();
        let exists = inner
            .handlers
            .iter()
            .any(|(t, h)| t == event_type && Arc::ptr_eq(h, &handler));
        if !exists {
            inner.handlers.push((event_type.to_string(), handler));
        }
        Ok(())
    }

    fn deregister_event_handler(&self, event_type: &str, handler: &EventHandler) -> Result<()> {
        self.record(AdapterCall::DeregisterEventHandler(event_type.to_string()))?;
        self.inner
            .lock()
            .handlers
            .retain(|(t, h)| !(t == event_type && Arc::ptr_eq(h, handler)));
        Ok(())
    }

    fn get_client_rect(&self) -> Result<ClientRect> {
        self.record(AdapterCall::GetClientRect)?;
        Ok(self.inner.lock().rect)
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<()> {
        self.record(AdapterCall::SetStyleProperty(
            property.to_string(),
            value.to_string(),
        ))
    }
}
