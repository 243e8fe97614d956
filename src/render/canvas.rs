// src/render/canvas.rs
//
// The drawing surface consumed by shapes and the animation loop

use crate::error::SurfaceError;
use crate::models::{BoxGeometry, Color, EllipseGeometry, PolygonGeometry};

/// A pixel canvas with filled and outlined primitives.
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Draw calls are queued until `present`.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn fill_box(&mut self, geometry: &BoxGeometry, color: Color);
    fn outline_box(&mut self, geometry: &BoxGeometry, color: Color);

    fn fill_ellipse(&mut self, geometry: &EllipseGeometry, color: Color);
    fn outline_ellipse(&mut self, geometry: &EllipseGeometry, color: Color);

    fn fill_polygon(&mut self, geometry: &PolygonGeometry, color: Color);
    fn outline_polygon(&mut self, geometry: &PolygonGeometry, color: Color);

    /// Flushes everything drawn since the last present.
    fn present(&mut self);

    /// Swaps in a fresh surface of the given size. The new surface is built
    /// before the old one is released; on error the current surface is kept.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;
}
