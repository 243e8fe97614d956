// src/render/mod.rs
// The drawing surface: the Canvas seam and its nannou implementation

pub mod canvas;
pub mod surface;

#[cfg(test)]
pub mod recording;

pub use canvas::Canvas;
pub use surface::NannouSurface;
