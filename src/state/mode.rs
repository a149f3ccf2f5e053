/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation and single-key commands
    #[default]
    Normal,
    /// Text entry
    Insert,
    /// Held only while the command prompt is reading a line
    Command,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }

    pub fn status(&self) -> String {
        format!("{} MODE", self.as_str())
    }
}
