// src/views/mod.rs

pub mod shape;

pub use shape::{Geometry, Shape, ShapeKind};
