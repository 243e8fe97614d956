// src/error.rs
//
// Startup and surface errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height} (each side must be between 1 and {max})")]
    InvalidSize { width: u32, height: u32, max: u32 },
}

/// Failures while bringing up the window and its drawing surface. Always fatal.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create drawing surface: {0}")]
    Surface(#[from] SurfaceError),
}
