pub mod editor;
pub mod mode;
pub mod prompt;
pub mod viewport;

pub use editor::EditorState;
pub use mode::Mode;
pub use prompt::Prompt;
pub use viewport::Viewport;
