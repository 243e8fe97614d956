// src/views/shape.rs
//
// A spawned shape: fixed geometry plus the fade that colors it

use std::fmt;

use crate::effects::ColorFade;
use crate::models::{Bounds, BoxGeometry, Color, EllipseGeometry, PolygonGeometry};
use crate::render::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Ellipse,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Box => "box",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box(BoxGeometry),
    Ellipse(EllipseGeometry),
    Polygon(PolygonGeometry),
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Box(_) => ShapeKind::Box,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Geometry::Box(geometry) => geometry.bounds(),
            Geometry::Ellipse(geometry) => geometry.bounds(),
            Geometry::Polygon(geometry) => geometry.bounds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    fade: ColorFade,
}

impl Shape {
    pub fn new(geometry: Geometry, fade: ColorFade) -> Self {
        Self { geometry, fade }
    }

    /// Fills with the current fade color, then outlines in opaque black.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let fill = self.fade.current();
        match &self.geometry {
            Geometry::Box(geometry) => {
                canvas.fill_box(geometry, fill);
                canvas.outline_box(geometry, Color::BLACK);
            }
            Geometry::Ellipse(geometry) => {
                canvas.fill_ellipse(geometry, fill);
                canvas.outline_ellipse(geometry, Color::BLACK);
            }
            Geometry::Polygon(geometry) => {
                canvas.fill_polygon(geometry, fill);
                canvas.outline_polygon(geometry, Color::BLACK);
            }
        }
    }

    pub fn step(&mut self) {
        self.fade.step();
    }

    pub fn is_done(&self) -> bool {
        self.fade.is_finished()
    }

    /// Draws with the current color, then advances the fade.
    pub fn draw_and_step<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.draw(canvas);
        self.step();
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn fade(&self) -> &ColorFade {
        &self.fade
    }
}
