use crate::core::Position;

/// Rows below the text area: the status bar and the message line. Reserving
/// only one would push the message line past the bottom and scroll the frame.
pub const RESERVED_ROWS: u16 = 2;

/// The visible window into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows, excluding the reserved rows.
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        let mut viewport = Self {
            row_offset: 0,
            col_offset: 0,
            rows: 1,
            cols: 1,
        };
        viewport.set_dimensions(width, height);
        viewport
    }

    /// Terminal size in cells. Both axes keep at least one text cell so the
    /// scroll invariant stays satisfiable on tiny terminals.
    pub fn set_dimensions(&mut self, width: u16, height: u16) {
        self.rows = usize::from(height.saturating_sub(RESERVED_ROWS)).max(1);
        self.cols = usize::from(width).max(1);
    }

    /// Moves the offsets just enough to bring `cursor` into view.
    pub fn scroll(&mut self, cursor: Position) {
        if cursor.row < self.row_offset {
            self.row_offset = cursor.row;
        }
        if cursor.row >= self.row_offset + self.rows {
            self.row_offset = cursor.row + 1 - self.rows;
        }

        if cursor.col < self.col_offset {
            self.col_offset = cursor.col;
        }
        if cursor.col >= self.col_offset + self.cols {
            self.col_offset = cursor.col + 1 - self.cols;
        }
    }

    pub fn contains(&self, cursor: Position) -> bool {
        (self.row_offset..self.row_offset + self.rows).contains(&cursor.row)
            && (self.col_offset..self.col_offset + self.cols).contains(&cursor.col)
    }
}
