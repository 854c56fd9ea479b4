//! Indicator Rendering Surface
//!
//! A small DOM-like element model: class list, inline style, a bounding
//! rectangle supplied by the host's layout, and event listeners. Transitions
//! themselves are the host's business; the surface only records what the
//! widget asked for and lets the host dispatch events back.

mod element;
mod error;

pub use element::Element;
pub use error::SurfaceError;

pub type Result<T> = std::result::Result<T, SurfaceError>;
