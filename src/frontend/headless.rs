use std::collections::VecDeque;

use crate::keybinding::Key;
use crate::state::EditorState;

use super::screen::Screen;
use super::traits::{Frontend, FrontendError, FrontendEvent};

/// A frontend without a terminal. Input comes from a queue filled up front;
/// every rendered frame is kept for inspection. Once the queue runs dry,
/// polling fails with [`FrontendError::InputClosed`].
#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    width: u16,
    height: u16,
    events: VecDeque<FrontendEvent>,
    screens: Vec<Screen>,
}

impl HeadlessFrontend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            events: VecDeque::new(),
            screens: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: FrontendEvent) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, key: Key) {
        self.push_event(FrontendEvent::Key(key));
    }

    /// Queues raw terminal bytes, one key per byte.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_key(Key::from_byte(b));
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn last_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }
}

impl Frontend for HeadlessFrontend {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render(&mut self, state: &EditorState) -> Result<(), FrontendError> {
        self.screens.push(Screen::compose(state));
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<FrontendEvent>, FrontendError> {
        let event = self.events.pop_front().ok_or(FrontendError::InputClosed)?;
        if let FrontendEvent::Resize(width, height) = event {
            self.width = width;
            self.height = height;
        }
        Ok(Some(event))
    }
}
