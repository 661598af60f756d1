//! Terminal driver: spin the cube and dump it as colored glyphs
//!
//! Each frame clears the display, advances the rotation, rasterizes the
//! face outlines and flushes the canvas as text. The loop is
//! unconditional; raw mode is deliberately left off so Ctrl-C still
//! delivers an interrupt, which is the exit path.

use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, stdout, Write};
use std::thread;
use std::time::Duration;
use tumble_core::{Canvas, Color, Cube, DEFAULT_SIZE};

pub mod renderer;

/// Wall-clock delay between frames.
const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Main application struct for terminal rendering.
pub struct TerminalApp {
    canvas: Canvas,
    cube: Cube,
    reverse: bool,
}

impl TerminalApp {
    pub fn new(cube: Cube, reverse: bool) -> Self {
        log::info!("terminal renderer: {DEFAULT_SIZE}x{DEFAULT_SIZE} cells");
        Self {
            canvas: Canvas::new(DEFAULT_SIZE, DEFAULT_SIZE, Color::BLACK),
            cube,
            reverse,
        }
    }

    /// Run the frame loop until the process is interrupted.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        loop {
            queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

            self.cube.rotate(self.reverse);
            self.cube.rasterize(&mut self.canvas);
            renderer::draw(&self.canvas, &mut stdout)?;
            stdout.flush()?;

            thread::sleep(FRAME_DELAY);
            self.canvas.clear();
        }
    }
}
