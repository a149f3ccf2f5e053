mod input;
mod render;

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    terminal::{self, ClearType},
};

use crate::state::EditorState;

use super::screen::Screen;
use super::traits::{Frontend, FrontendError, FrontendEvent};

pub use render::draw;

/// Holds the terminal in raw mode for as long as it lives.
///
/// Raw mode is entered exactly once, in [`RawModeGuard::acquire`], and left
/// exactly once: by [`RawModeGuard::release`], or by `Drop` on any other
/// exit path including unwinding.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn acquire() -> Result<Self, FrontendError> {
        terminal::enable_raw_mode()
            .map_err(|e| FrontendError::Terminal(format!("cannot enter raw mode: {}", e)))?;
        log::debug!("raw mode on");
        Ok(Self { active: true })
    }

    pub fn release(&mut self) -> Result<(), FrontendError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()
            .map_err(|e| FrontendError::Terminal(format!("cannot restore terminal: {}", e)))?;
        log::debug!("raw mode off");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::error!("{}", e);
        }
    }
}

pub struct TerminalFrontend {
    stdout: Stdout,
    width: u16,
    height: u16,
    poll_interval: Duration,
    /// Units already read but not yet handed out.
    pending: VecDeque<FrontendEvent>,
    raw_mode: RawModeGuard,
}

impl TerminalFrontend {
    /// Switches the terminal to raw mode and reads its size. Failing to read
    /// the size is fatal; the guard has already been taken, so raw mode is
    /// released again on that path too.
    pub fn new(poll_interval: Duration) -> Result<Self, FrontendError> {
        let raw_mode = RawModeGuard::acquire()?;
        let (width, height) = query_size()?;
        log::info!("terminal is {}x{}", width, height);
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
            poll_interval,
            pending: VecDeque::new(),
            raw_mode,
        })
    }

    /// Clears the screen and leaves raw mode, reporting a failure to restore.
    pub fn shutdown(mut self) -> Result<(), FrontendError> {
        self.clear_screen()?;
        self.raw_mode.release()
    }

    fn clear_screen(&mut self) -> Result<(), FrontendError> {
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;
        Ok(())
    }
}

fn query_size() -> Result<(u16, u16), FrontendError> {
    let (width, height) = terminal::size()
        .map_err(|e| FrontendError::Terminal(format!("cannot determine window size: {}", e)))?;
    if width == 0 {
        return Err(FrontendError::Terminal(
            "cannot determine window size: zero columns".to_string(),
        ));
    }
    Ok((width, height))
}

impl Frontend for TerminalFrontend {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render(&mut self, state: &EditorState) -> Result<(), FrontendError> {
        draw(&Screen::compose(state), &mut self.stdout)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<FrontendEvent>, FrontendError> {
        if self.pending.is_empty() {
            if !event::poll(self.poll_interval)? {
                return Ok(None);
            }
            self.pending.extend(input::convert_event(event::read()?));
        }
        let event = self.pending.pop_front();
        if let Some(FrontendEvent::Resize(width, height)) = event {
            self.width = width;
            self.height = height;
        }
        Ok(event)
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if self.raw_mode.active {
            let _ = self.clear_screen();
        }
    }
}
