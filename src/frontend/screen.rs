use crate::state::{EditorState, Mode};

/// One frame, ready to be written to a terminal: text rows, the status bar,
/// the message line, and where the cursor goes (0-based `(col, row)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub rows: Vec<String>,
    pub status_bar: String,
    pub message: String,
    pub cursor: (u16, u16),
    pub mode: Mode,
}

impl Screen {
    /// Builds the frame for `state`. Expects the viewport to have been
    /// scrolled to the cursor already.
    pub fn compose(state: &EditorState) -> Self {
        let viewport = &state.viewport;
        let buffer = &state.buffer;

        let rows = (0..viewport.rows)
            .map(|y| match buffer.line(viewport.row_offset + y) {
                Some(line) => {
                    let start = viewport.col_offset.min(line.len());
                    let end = (start + viewport.cols).min(line.len());
                    String::from_utf8_lossy(&line[start..end]).into_owned()
                }
                None => "~".to_string(),
            })
            .collect();

        let left = format!(
            "{}{} - {} lines",
            state.display_name(),
            if buffer.is_dirty() { " [Modified]" } else { "" },
            buffer.line_count()
        );
        let right = buffer.cursor().to_string();
        let status_bar = status_bar(&left, &right, viewport.cols);

        let message: String = state.status_message.chars().take(viewport.cols).collect();

        let cursor = if state.mode == Mode::Command {
            let col = message.chars().count().min(viewport.cols - 1);
            (col, viewport.rows + 1)
        } else {
            let pos = buffer.cursor();
            (
                pos.col.saturating_sub(viewport.col_offset),
                pos.row.saturating_sub(viewport.row_offset),
            )
        };

        Self {
            rows,
            status_bar,
            message,
            cursor: (clamp_u16(cursor.0), clamp_u16(cursor.1)),
            mode: state.mode,
        }
    }
}

/// `left`, then `right` flush against the right edge of `width`. Whatever
/// does not fit is cut off at the right.
fn status_bar(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = width.saturating_sub(used);
    format!("{}{}{}", left, " ".repeat(padding), right)
        .chars()
        .take(width)
        .collect()
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Buffer, Position};
    use std::path::PathBuf;

    fn state_with(lines: &[&str], width: u16, height: u16) -> EditorState {
        let mut state = EditorState::new();
        state.buffer = Buffer::from_lines(lines.iter().copied());
        state.set_dimensions(width, height);
        state
    }

    #[test]
    fn test_rows_and_placeholders() {
        let mut state = state_with(&["first", "second"], 20, 6);
        state.scroll();
        let screen = Screen::compose(&state);

        assert_eq!(screen.rows, vec!["first", "second", "~", "~"]);
        assert_eq!(screen.cursor, (0, 0));
    }

    #[test]
    fn test_rows_are_cut_to_viewport() {
        let mut state = state_with(&["0123456789abcdef"], 6, 4);
        state.buffer.set_cursor(Position::new(0, 8));
        state.scroll();
        let screen = Screen::compose(&state);

        assert_eq!(state.viewport.col_offset, 3);
        assert_eq!(screen.rows[0], "345678");
        assert_eq!(screen.cursor, (5, 0));
    }

    #[test]
    fn test_short_line_right_of_scroll_is_blank() {
        let mut state = state_with(&["0123456789", "ab"], 4, 5);
        state.buffer.set_cursor(Position::new(0, 9));
        state.scroll();
        let screen = Screen::compose(&state);

        assert_eq!(screen.rows[0], "6789");
        assert_eq!(screen.rows[1], "");
    }

    #[test]
    fn test_status_bar_layout() {
        let mut state = state_with(&["abc"], 30, 5);
        state.filename = Some(PathBuf::from("notes.txt"));
        state.buffer.set_cursor(Position::new(0, 2));
        let screen = Screen::compose(&state);

        assert_eq!(screen.status_bar.chars().count(), 30);
        assert!(screen.status_bar.starts_with("notes.txt - 1 lines"));
        assert!(screen.status_bar.ends_with("1:3"));
    }

    #[test]
    fn test_status_bar_shows_modified_and_no_name() {
        let mut state = state_with(&[], 40, 5);
        state.buffer.insert_char(b'a');
        let screen = Screen::compose(&state);

        assert!(screen.status_bar.starts_with("[No Name] [Modified] - 1 lines"));
    }

    #[test]
    fn test_status_bar_truncates_on_narrow_terminal() {
        assert_eq!(status_bar("a long name - 3 lines", "1:1", 8), "a long n");
        assert_eq!(status_bar("ab", "1:1", 8), "ab   1:1");
    }

    #[test]
    fn test_cursor_on_message_line_while_prompting() {
        let mut state = state_with(&["abc"], 20, 6);
        state.mode = Mode::Command;
        state.status_message = ":wq".to_string();
        let screen = Screen::compose(&state);

        assert_eq!(screen.message, ":wq");
        assert_eq!(screen.cursor, (3, 5));
    }
}
