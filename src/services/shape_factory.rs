// src/services/shape_factory.rs
//
// Spawns a random shape inside a random cell of a grid laid over the canvas.

use rand::Rng;

use crate::config::Profile;
use crate::effects::ColorFade;
use crate::models::{BoxGeometry, EllipseGeometry, Point, PolygonGeometry};
use crate::views::{Geometry, Shape};

/// Gap in pixels between a cell edge and the shape inside it.
const CELL_INSET: i32 = 2;

/// One cell of the grid, already inset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
    pub inset_x: i32,
    pub inset_y: i32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeFactory {
    columns: u32,
    rows: u32,
    randomize_initial_alpha: bool,
}

impl ShapeFactory {
    pub fn new(profile: &Profile) -> Self {
        Self {
            columns: profile.grid_columns.max(1),
            rows: profile.grid_rows.max(1),
            randomize_initial_alpha: profile.randomize_initial_alpha,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The inset rectangle for grid cell (`column`, `row`).
    pub fn cell(&self, canvas_width: u32, canvas_height: u32, column: u32, row: u32) -> Cell {
        let width = (canvas_width / self.columns) as i32;
        let height = (canvas_height / self.rows) as i32;

        // The inset never exceeds half a cell, so shapes in tiny cells stay
        // inside their cell and the far corner never inverts.
        let inset_x = CELL_INSET.min(width / 2);
        let inset_y = CELL_INSET.min(height / 2);

        let x1 = inset_x + column as i32 * width;
        let y1 = inset_y + row as i32 * height;

        Cell {
            column,
            row,
            inset_x,
            inset_y,
            x1,
            y1,
            x2: x1 + width - inset_x,
            y2: y1 + height - inset_y,
            width,
            height,
        }
    }

    pub fn create_random<R: Rng + ?Sized>(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        rng: &mut R,
    ) -> Shape {
        let column = rng.gen_range(0..self.columns);
        let row = rng.gen_range(0..self.rows);
        let cell = self.cell(canvas_width, canvas_height, column, row);

        let geometry = match rng.gen_range(0..4) {
            0 => Geometry::Box(BoxGeometry::new(cell.x1, cell.y1, cell.x2, cell.y2)),
            1 => Geometry::Polygon(arrow(&cell)),
            2 => Geometry::Polygon(diamond(&cell)),
            _ => Geometry::Ellipse(ellipse(&cell)),
        };

        let alpha = ColorFade::initial_alpha(rng, self.randomize_initial_alpha);
        let fade = ColorFade::random(rng, alpha);

        log::debug!(
            "spawned {} in cell ({}, {}) fading to {:?}",
            geometry.kind(),
            cell.column,
            cell.row,
            fade.target()
        );

        Shape::new(geometry, fade)
    }
}

// Eight-point arrow pointing along the cell's axes.
fn arrow(cell: &Cell) -> PolygonGeometry {
    let Cell { x1, y1, x2, y2, .. } = *cell;
    let (w2, w1, ww1) = (cell.width / 2, cell.width / 4, cell.width / 8);
    let (h2, h1, hh1) = (cell.height / 2, cell.height / 4, cell.height / 8);

    let xs = [
        x1,
        x1 + w1 + ww1,
        x1 + w2,
        x1 + w2 + ww1,
        x2,
        x1 + w2 + ww1,
        x1 + w2,
        x1 + w1 + ww1,
    ];
    let ys = [
        y1 + h2,
        y1 + h2 + hh1,
        y2,
        y1 + h2 + hh1,
        y1 + h2,
        y1 + h1 + hh1,
        y1,
        y1 + h1 + hh1,
    ];
    polygon(&xs, &ys)
}

fn diamond(cell: &Cell) -> PolygonGeometry {
    let Cell { x1, y1, x2, y2, .. } = *cell;
    let w2 = cell.width / 2;
    let h2 = cell.height / 2;

    polygon(&[x1, x1 + w2, x2, x1 + w2], &[y1 + h2, y2, y1 + h2, y1])
}

fn ellipse(cell: &Cell) -> EllipseGeometry {
    let w2 = cell.width / 2;
    let h2 = cell.height / 2;
    EllipseGeometry::new(
        Point::new(cell.x1 + w2 - cell.inset_x, cell.y1 + h2 - cell.inset_y),
        w2,
        h2,
    )
}

fn polygon(xs: &[i32], ys: &[i32]) -> PolygonGeometry {
    // vertex lists above are fixed at 4 and 8 entries
    PolygonGeometry::from_coords(xs, ys)
        .unwrap_or_else(|| unreachable!("mismatched or short vertex list"))
}
