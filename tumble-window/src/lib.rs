//! Windowed driver: blit the canvas as pixel rectangles
//!
//! The canvas is drawn cell by cell into a 32-bit framebuffer, centered
//! on the surface, and presented through minifb. The loop runs until the
//! window reports a close request.

use anyhow::{Context, Result};
use minifb::{Window, WindowOptions};
use std::time::Duration;
use tumble_core::{Canvas, Color, Cube, DEFAULT_SIZE};

/// Window surface dimensions in pixels.
const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;
/// Side of the square drawn per canvas cell.
const RECT_SIZE: usize = 1;
/// Surface clear color behind the canvas.
const BACKGROUND: Color = Color::rgb(51, 51, 51);

/// Main application struct for windowed rendering.
pub struct WindowApp {
    window: Window,
    framebuffer: Vec<u32>,
    canvas: Canvas,
    cube: Cube,
    reverse: bool,
}

impl WindowApp {
    pub fn new(cube: Cube, reverse: bool) -> Result<Self> {
        let mut window = Window::new("tumble", WIDTH, HEIGHT, WindowOptions::default())
            .context("failed to open window")?;
        window.limit_update_rate(Some(Duration::from_millis(100)));
        log::info!("window surface: {WIDTH}x{HEIGHT} px");

        Ok(Self {
            window,
            framebuffer: vec![BACKGROUND.to_argb(); WIDTH * HEIGHT],
            canvas: Canvas::new(DEFAULT_SIZE, DEFAULT_SIZE, Color::BLACK),
            cube,
            reverse,
        })
    }

    /// Run the frame loop until the window is closed.
    pub fn run(&mut self) -> Result<()> {
        while self.window.is_open() {
            self.framebuffer.fill(BACKGROUND.to_argb());
            self.blit_canvas();

            self.cube.rotate(self.reverse);
            self.canvas.clear();
            self.cube.rasterize(&mut self.canvas);

            self.window
                .update_with_buffer(&self.framebuffer, WIDTH, HEIGHT)
                .context("failed to present frame")?;
        }
        Ok(())
    }

    /// Draw each canvas cell as a `RECT_SIZE` square, the whole grid
    /// centered on the surface.
    fn blit_canvas(&mut self) {
        let left = WIDTH / 2 - self.canvas.width() * RECT_SIZE / 2;
        let top = HEIGHT / 2 - self.canvas.height() * RECT_SIZE / 2;
        for y in 0..self.canvas.height() {
            for x in 0..self.canvas.width() {
                let argb = self.canvas.cell(x, y).to_argb();
                for dy in 0..RECT_SIZE {
                    for dx in 0..RECT_SIZE {
                        let px = left + x * RECT_SIZE + dx;
                        let py = top + y * RECT_SIZE + dy;
                        if px < WIDTH && py < HEIGHT {
                            self.framebuffer[py * WIDTH + px] = argb;
                        }
                    }
                }
            }
        }
    }
}
