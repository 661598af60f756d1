//! Spin a wireframe cube in the terminal or in a window.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tumble_core::Cube;
use tumble_terminal::TerminalApp;
use tumble_window::WindowApp;

/// Edge length of the demo cube in object-space units.
const CUBE_SIZE: f32 = 0.3;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output device
    #[arg(value_enum)]
    mode: Mode,

    /// Spin the cube the other way
    #[arg(long)]
    reverse: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Windowed surface
    Gui,
    /// Terminal glyphs
    Tui,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cube = Cube::centered(CUBE_SIZE);
    match cli.mode {
        Mode::Tui => TerminalApp::new(cube, cli.reverse).run()?,
        Mode::Gui => WindowApp::new(cube, cli.reverse)?.run()?,
    }
    Ok(())
}
