use thiserror::Error;

use crate::keybinding::Key;
use crate::state::EditorState;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Input closed")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    Key(Key),
    Resize(u16, u16),
}

/// Everything the editor needs from a display: draw a frame, hand over the
/// next input unit, report the size.
pub trait Frontend {
    /// Terminal size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    fn render(&mut self, state: &EditorState) -> Result<(), FrontendError>;

    /// Waits a short, bounded time for input. `Ok(None)` means nothing
    /// arrived yet; callers redraw and ask again.
    fn poll_event(&mut self) -> Result<Option<FrontendEvent>, FrontendError>;

    fn run(&mut self, state: &mut EditorState) -> Result<(), FrontendError>
    where
        Self: Sized,
    {
        while !state.should_quit {
            state.refresh(self)?;
            if let Some(key) = state.next_key(self)? {
                state.handle_key(key, self)?;
            }
        }
        log::info!("leaving main loop");
        Ok(())
    }
}
