//! Colored glyph output for the canvas

use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use tumble_core::{Canvas, GLYPH};

/// Queue one frame of the canvas as terminal glyphs. Painted cells print
/// the glyph in their own color, background cells print a space.
pub fn draw<W: Write>(canvas: &Canvas, writer: &mut W) -> std::io::Result<()> {
    let background = canvas.background();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let cell = canvas.cell(x, y);
            if cell == background {
                writer.queue(Print(' '))?;
            } else {
                writer.queue(SetForegroundColor(TermColor::Rgb {
                    r: cell.r,
                    g: cell.g,
                    b: cell.b,
                }))?;
                writer.queue(Print(GLYPH))?;
            }
        }
        writer.queue(Print('\n'))?;
    }
    writer.queue(ResetColor)?;
    Ok(())
}
