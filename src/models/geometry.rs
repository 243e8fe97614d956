// src/models/geometry.rs
// Pixel-space geometry for shapes. Origin is the top-left corner of the canvas, y grows downward.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box, inclusive of both corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// True when the box lies entirely inside `[0, width] x [0, height]`.
    pub fn within(&self, width: u32, height: u32) -> bool {
        self.min_x >= 0
            && self.min_y >= 0
            && i64::from(self.max_x) <= i64::from(width)
            && i64::from(self.max_y) <= i64::from(height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl BoxGeometry {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            top_left: Point::new(x1, y1),
            bottom_right: Point::new(x2, y2),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.top_left.x.min(self.bottom_right.x),
            min_y: self.top_left.y.min(self.bottom_right.y),
            max_x: self.top_left.x.max(self.bottom_right.x),
            max_y: self.top_left.y.max(self.bottom_right.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseGeometry {
    pub center: Point,
    pub radius_x: i32,
    pub radius_y: i32,
}

impl EllipseGeometry {
    pub fn new(center: Point, radius_x: i32, radius_y: i32) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    pub fn bounds(&self) -> Bounds {
        let rx = self.radius_x.abs();
        let ry = self.radius_y.abs();
        Bounds {
            min_x: self.center.x - rx,
            min_y: self.center.y - ry,
            max_x: self.center.x + rx,
            max_y: self.center.y + ry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonGeometry {
    vertices: Vec<Point>,
}

impl PolygonGeometry {
    pub const MIN_VERTICES: usize = 3;

    /// Returns `None` for fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return None;
        }
        Some(Self { vertices })
    }

    /// Builds a polygon from parallel x and y sequences of the same length.
    pub fn from_coords(xs: &[i32], ys: &[i32]) -> Option<Self> {
        if xs.len() != ys.len() {
            return None;
        }
        let vertices = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn bounds(&self) -> Bounds {
        // non-empty by construction
        let first = self.vertices[0];
        self.vertices.iter().fold(
            Bounds {
                min_x: first.x,
                min_y: first.y,
                max_x: first.x,
                max_y: first.y,
            },
            |acc, p| Bounds {
                min_x: acc.min_x.min(p.x),
                min_y: acc.min_y.min(p.y),
                max_x: acc.max_x.max(p.x),
                max_y: acc.max_y.max(p.y),
            },
        )
    }
}
