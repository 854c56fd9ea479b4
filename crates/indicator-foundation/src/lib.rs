//! Tab Indicator Foundations
//!
//! The variant-specific logic of the tab indicator lives here, written
//! against the narrow [`Adapter`] capability set instead of a concrete
//! rendering surface:
//!
//! ```text
//! Bar:   Inactive → Activating → Active → Deactivating → Inactive
//! Icon:  Inactive ↔ Active
//! ```

mod adapter;
mod bar;
mod classes;
mod error;
mod foundation;
mod geometry;
mod icon;
mod state;

#[cfg(test)]
mod testing;

pub use adapter::{Adapter, Event, EventHandler};
pub use bar::BarFoundation;
pub use classes::{CssClasses, DEFAULT_CLASS_PREFIX, TRANSITION_END_EVENT};
pub use error::AdapterError;
pub use foundation::Foundation;
pub use geometry::{ClientRect, IndicatorBounds, IndicatorTransform};
pub use icon::IconFoundation;
pub use state::IndicatorState;

pub type Result<T> = std::result::Result<T, AdapterError>;
