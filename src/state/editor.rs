use std::path::PathBuf;

use crate::commands::{file_cmds, ExCommand};
use crate::core::{file, Buffer, Direction, FileError};
use crate::frontend::{Frontend, FrontendError, FrontendEvent};
use crate::keybinding::Key;

use super::mode::Mode;
use super::prompt::Prompt;
use super::viewport::Viewport;

pub const HELP_MESSAGE: &str = "HELP: :q = quit | :w = save | :wq = save & quit";
pub const NO_NAME: &str = "[No Name]";

pub struct EditorState {
    pub buffer: Buffer,
    pub mode: Mode,
    pub viewport: Viewport,
    pub filename: Option<PathBuf>,
    pub status_message: String,
    pub should_quit: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            mode: Mode::Normal,
            viewport: Viewport::default(),
            filename: None,
            status_message: HELP_MESSAGE.to_string(),
            should_quit: false,
        }
    }

    /// Loads `path` and binds it as the save target. A missing file still
    /// binds the name, with an empty buffer.
    pub fn open_file(&mut self, path: PathBuf) -> Result<(), FileError> {
        self.buffer = file::load(&path)?;
        self.filename = Some(path);
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        Ok(())
    }

    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map_or_else(|| NO_NAME.to_string(), |p| p.display().to_string())
    }

    pub fn set_dimensions(&mut self, width: u16, height: u16) {
        self.viewport.set_dimensions(width, height);
    }

    pub fn scroll(&mut self) {
        self.viewport.scroll(self.buffer.cursor());
    }

    /// Scrolls and draws one frame.
    pub fn refresh(&mut self, frontend: &mut dyn Frontend) -> Result<(), FrontendError> {
        self.scroll();
        frontend.render(self)
    }

    /// Next key from the frontend; resizes are applied here and reported as
    /// "no input".
    pub fn next_key(
        &mut self,
        frontend: &mut dyn Frontend,
    ) -> Result<Option<Key>, FrontendError> {
        match frontend.poll_event()? {
            Some(FrontendEvent::Key(key)) => Ok(Some(key)),
            Some(FrontendEvent::Resize(width, height)) => {
                log::debug!("resized to {}x{}", width, height);
                self.set_dimensions(width, height);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn handle_key(
        &mut self,
        key: Key,
        frontend: &mut dyn Frontend,
    ) -> Result<(), FrontendError> {
        log::trace!("{} key {}", self.mode.as_str(), key);
        match self.mode {
            Mode::Normal => self.handle_normal_key(key, frontend),
            Mode::Insert => {
                self.handle_insert_key(key);
                Ok(())
            }
            // The prompt loop consumes every key while this mode is set.
            Mode::Command => Ok(()),
        }
    }

    fn handle_normal_key(
        &mut self,
        key: Key,
        frontend: &mut dyn Frontend,
    ) -> Result<(), FrontendError> {
        match key {
            Key::Char('i') => self.set_mode(Mode::Insert),
            Key::Char('h') | Key::Left => self.buffer.move_cursor(Direction::Left),
            Key::Char('j') | Key::Down => self.buffer.move_cursor(Direction::Down),
            Key::Char('k') | Key::Up => self.buffer.move_cursor(Direction::Up),
            Key::Char('l') | Key::Right => self.buffer.move_cursor(Direction::Right),
            Key::Char('x') => self.buffer.delete_char_at(),
            Key::Char('o') => {
                self.buffer.open_line_below();
                self.set_mode(Mode::Insert);
            }
            Key::Char(':') => {
                let text = self.prompt(frontend, ":")?;
                file_cmds::execute(self, frontend, ExCommand::parse(&text))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.set_mode(Mode::Normal),
            Key::Backspace => self.buffer.delete_char_before(),
            Key::Enter => self.buffer.split_line(),
            Key::Left => self.buffer.move_cursor(Direction::Left),
            Key::Down => self.buffer.move_cursor(Direction::Down),
            Key::Up => self.buffer.move_cursor(Direction::Up),
            Key::Right => self.buffer.move_cursor(Direction::Right),
            Key::Char(c) if key.is_printable() => {
                let mut utf8 = [0; 4];
                for byte in c.encode_utf8(&mut utf8).bytes() {
                    self.buffer.insert_char(byte);
                }
            }
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.status_message = mode.status();
    }

    /// Reads a line at the bottom of the screen, redrawing after every key.
    ///
    /// Returns the typed text on Enter and an empty string on Escape. The
    /// editor is in [`Mode::Command`] for the duration and back in
    /// [`Mode::Normal`] afterwards, with the status line cleared.
    pub fn prompt(
        &mut self,
        frontend: &mut dyn Frontend,
        prefix: &str,
    ) -> Result<String, FrontendError> {
        let mut prompt = Prompt::new(prefix);
        self.mode = Mode::Command;

        let result = loop {
            self.status_message = prompt.display();
            self.refresh(frontend)?;

            let Some(key) = self.next_key(frontend)? else {
                continue;
            };
            match key {
                Key::Enter => break prompt.take(),
                Key::Escape => break String::new(),
                Key::Backspace => prompt.delete_backward(),
                Key::Char(c) if key.is_printable() => prompt.insert_char(c),
                _ => {}
            }
        };

        self.mode = Mode::Normal;
        self.status_message.clear();
        Ok(result)
    }
}
