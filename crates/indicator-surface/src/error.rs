//! Surface error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Element is detached from the document")]
    Detached,

    #[error("Invalid class token: {0:?}")]
    InvalidToken(String),
}
