pub mod headless;
pub mod screen;
pub mod terminal;
pub mod traits;

pub use headless::HeadlessFrontend;
pub use screen::Screen;
pub use terminal::{RawModeGuard, TerminalFrontend};
pub use traits::{Frontend, FrontendError, FrontendEvent};
