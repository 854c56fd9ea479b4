//! Adapter error types

use thiserror::Error;

/// Failure reported by the rendering surface behind an [`Adapter`](crate::Adapter),
/// or a foundation asked to make a state change its machine does not allow.
///
/// Foundations never recover from surface failures; they hand them back to
/// the caller untouched, with the surface's own error kept as the source.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(transparent)]
    Surface(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl AdapterError {
    pub fn surface<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AdapterError::Surface(Box::new(err))
    }

    /// Borrow the underlying surface error as a concrete type, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            AdapterError::Surface(err) => err.downcast_ref::<E>(),
            AdapterError::InvalidTransition { .. } => None,
        }
    }
}
