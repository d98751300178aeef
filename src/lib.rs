//! A 32×32 greyscale pixel-art grid.
//!
//! Dragging the pointer darkens the cell underneath and its orthogonal
//! neighbours; releasing rasterizes the grid into a 320×320 PNG.
//! [`session::Sketch`] is the entry point for embedding; the binary wraps it
//! in a minifb window.

pub mod brush;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod grid;
pub mod pointer;
pub mod raster;
pub mod session;
pub mod types;
pub mod view;

pub use error::{Error, Result};
pub use grid::Grid;
pub use raster::Export;
pub use session::Sketch;
