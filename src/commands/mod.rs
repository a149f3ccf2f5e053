pub mod ex;
pub mod file_cmds;

pub use ex::ExCommand;
