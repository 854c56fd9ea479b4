//! Tab Indicator
//!
//! Attaches an animated tab indicator to an element. The element's variant
//! marker (`indicator--bar` or `indicator--icon`) picks the foundation once,
//! at attach time; afterwards the component only forwards calls to it.

mod adapter;
mod component;
mod config;
mod error;
mod variant;

pub use adapter::ElementAdapter;
pub use component::TabIndicator;
pub use config::IndicatorConfig;
pub use error::CoreError;
pub use variant::IndicatorVariant;

// Re-export the building blocks
pub use indicator_foundation::{
    Adapter, AdapterError, BarFoundation, ClientRect, CssClasses, Event, EventHandler,
    Foundation, IconFoundation, IndicatorBounds, IndicatorState, IndicatorTransform,
};
pub use indicator_foundation::Result as AdapterResult;
pub use indicator_surface::{Element, SurfaceError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
