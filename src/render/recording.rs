// src/render/recording.rs
// Canvas double that records every call, for tests

use super::Canvas;
use crate::error::SurfaceError;
use crate::models::{BoxGeometry, Color, EllipseGeometry, PolygonGeometry};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillBox(BoxGeometry, Color),
    OutlineBox(BoxGeometry, Color),
    FillEllipse(EllipseGeometry, Color),
    OutlineEllipse(EllipseGeometry, Color),
    FillPolygon(PolygonGeometry, Color),
    OutlinePolygon(PolygonGeometry, Color),
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
    /// Number of surfaces created, including the first one.
    pub surfaces: usize,
    pub fail_resize: bool,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            surfaces: 1,
            fail_resize: false,
        }
    }

    pub fn presents(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Present))
            .count()
    }

    /// Fill colors in draw order.
    pub fn fills(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillBox(_, color)
                | DrawCall::FillEllipse(_, color)
                | DrawCall::FillPolygon(_, color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_box(&mut self, geometry: &BoxGeometry, color: Color) {
        self.calls.push(DrawCall::FillBox(*geometry, color));
    }

    fn outline_box(&mut self, geometry: &BoxGeometry, color: Color) {
        self.calls.push(DrawCall::OutlineBox(*geometry, color));
    }

    fn fill_ellipse(&mut self, geometry: &EllipseGeometry, color: Color) {
        self.calls.push(DrawCall::FillEllipse(*geometry, color));
    }

    fn outline_ellipse(&mut self, geometry: &EllipseGeometry, color: Color) {
        self.calls.push(DrawCall::OutlineEllipse(*geometry, color));
    }

    fn fill_polygon(&mut self, geometry: &PolygonGeometry, color: Color) {
        self.calls.push(DrawCall::FillPolygon(geometry.clone(), color));
    }

    fn outline_polygon(&mut self, geometry: &PolygonGeometry, color: Color) {
        self.calls.push(DrawCall::OutlinePolygon(geometry.clone(), color));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if self.fail_resize || width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize {
                width,
                height,
                max: u32::MAX,
            });
        }
        self.width = width;
        self.height = height;
        self.surfaces += 1;
        Ok(())
    }
}
