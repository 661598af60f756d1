//! Fixed-resolution color grid holding one rendered frame

use crate::color::Color;

/// Default square canvas edge in cells.
pub const DEFAULT_SIZE: usize = 50;

/// Glyph printed for a painted cell in text dumps.
pub const GLYPH: char = '`';

/// A row-major grid of colors. Allocated once, mutated in place every
/// frame, never resized. Every cell always holds a valid color.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
    cells: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            cells: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Set every cell to `color`.
    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    /// Reset every cell to the background color.
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    /// Write one cell. Coordinates outside the grid are dropped; the
    /// rasterizer derives indices from float products and is allowed to
    /// overshoot by design.
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = color;
    }

    pub fn cell(&self, x: usize, y: usize) -> Color {
        self.cells[y * self.width + x]
    }

    /// Dump the grid as text, one glyph per painted cell and a space per
    /// background cell, rows newline-terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cell(x, y) == self.background {
                    out.push(' ');
                } else {
                    out.push(GLYPH);
                }
            }
            out.push('\n');
        }
        out
    }
}
