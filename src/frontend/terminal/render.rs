use std::io::Write;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::frontend::screen::Screen;

/// Writes a whole frame: clear, home, every text row with CR+LF, the status
/// bar in reverse video, the message line, then the cursor. Nothing is
/// diffed against the previous frame.
pub fn draw<W: Write>(screen: &Screen, out: &mut W) -> std::io::Result<()> {
    queue!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;

    for row in &screen.rows {
        queue!(out, Print(row), Print("\r\n"))?;
    }

    queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(&screen.status_bar),
        SetAttribute(Attribute::Reset),
        Print("\r\n"),
        Print(&screen.message)
    )?;

    let (col, row) = screen.cursor;
    queue!(out, MoveTo(col, row), Show)?;

    Ok(())
}
