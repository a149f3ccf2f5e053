use super::position::{Direction, Position};

/// The open file's text as a list of byte lines, together with the cursor
/// and the unsaved-changes flag.
///
/// The cursor row may sit one past the last line (the virtual last row);
/// inserting there materializes the line. The column never points past the
/// end of an existing line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Vec<u8>>,
    cursor: Position,
    dirty: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            cursor: Position::start(),
            dirty: false,
        }
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    /// Length of `row` in bytes; zero for the virtual last row.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Vec::len)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Places the cursor, clamping it to the buffer the same way motions do.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor.row = pos.row.min(self.lines.len());
        self.cursor.col = pos.col;
        self.clamp_col();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn insert_char(&mut self, c: u8) {
        if self.cursor.row == self.lines.len() {
            self.lines.push(Vec::new());
        }
        let line = &mut self.lines[self.cursor.row];
        line.insert(self.cursor.col, c);
        self.cursor.col += 1;
        self.dirty = true;
    }

    /// Backspace. Does not join with the previous line at column 0.
    pub fn delete_char_before(&mut self) {
        let Some(line) = self.lines.get_mut(self.cursor.row) else {
            return;
        };
        if self.cursor.col == 0 {
            return;
        }
        line.remove(self.cursor.col - 1);
        self.cursor.col -= 1;
        self.dirty = true;
    }

    pub fn split_line(&mut self) {
        if self.cursor.row == self.lines.len() {
            self.lines.push(Vec::new());
        } else {
            let tail = self.lines[self.cursor.row].split_off(self.cursor.col);
            self.lines.insert(self.cursor.row + 1, tail);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.dirty = true;
    }

    /// Deletes the byte under the cursor; the cursor does not move.
    pub fn delete_char_at(&mut self) {
        let Some(line) = self.lines.get_mut(self.cursor.row) else {
            return;
        };
        if self.cursor.col >= line.len() {
            return;
        }
        line.remove(self.cursor.col);
        self.dirty = true;
    }

    pub fn open_line_below(&mut self) {
        let at = (self.cursor.row + 1).min(self.lines.len());
        self.lines.insert(at, Vec::new());
        self.cursor = Position::new(at, 0);
        self.dirty = true;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            Direction::Right => {
                if self.cursor.row < self.lines.len()
                    && self.cursor.col < self.lines[self.cursor.row].len()
                {
                    self.cursor.col += 1;
                }
            }
            Direction::Up => {
                if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                }
            }
            Direction::Down => {
                if self.cursor.row + 1 < self.lines.len() {
                    self.cursor.row += 1;
                }
            }
        }
        self.clamp_col();
    }

    fn clamp_col(&mut self) {
        if let Some(line) = self.lines.get(self.cursor.row) {
            self.cursor.col = self.cursor.col.min(line.len());
        } else {
            self.cursor.col = 0;
        }
    }
}
