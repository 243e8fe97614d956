pub mod shape_factory;

pub use shape_factory::{Cell, ShapeFactory};
