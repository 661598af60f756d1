//! Tumble core library - cube geometry and rasterization
//!
//! The frontend-agnostic half of the renderer: color and canvas types,
//! the slope-scan line rasterizer, and the rotating six-face cube.
//! Both the terminal and the window drivers consume this crate.

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, DEFAULT_SIZE, GLYPH};
pub use color::Color;
pub use geometry::{Cube, Face};
pub use raster::draw_line;
pub use transform::ROTATION_STEP;
