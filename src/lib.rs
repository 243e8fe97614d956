// src/lib.rs

pub mod animation;
pub mod app;
pub mod config;
pub mod controllers;
pub mod effects;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod views;

pub use error::{InitError, SurfaceError};
