pub mod buffer;
pub mod file;
pub mod position;

pub use buffer::Buffer;
pub use file::FileError;
pub use position::{Direction, Position};
