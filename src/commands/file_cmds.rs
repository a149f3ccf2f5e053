use std::path::PathBuf;

use crate::core::file;
use crate::frontend::{Frontend, FrontendError};
use crate::state::EditorState;

use super::ex::ExCommand;

pub const UNSAVED_CHANGES: &str = "Unsaved changes! Use :q! to force quit.";
pub const SAVE_ABORTED: &str = "Save aborted.";

pub fn execute(
    state: &mut EditorState,
    frontend: &mut dyn Frontend,
    command: ExCommand,
) -> Result<(), FrontendError> {
    log::debug!("command {:?}", command);
    match command {
        ExCommand::Cancelled => {}
        ExCommand::Quit { force } => exit(state, force),
        ExCommand::Write => save_buffer(state, frontend)?,
        ExCommand::WriteQuit => {
            save_buffer(state, frontend)?;
            exit(state, true);
        }
        ExCommand::Unknown(text) => {
            state.status_message = format!("Unknown command: {}", text);
        }
    }
    Ok(())
}

/// Writes the buffer to its file, asking for a name first if it has none.
/// Failures are reported on the status line only.
pub fn save_buffer(
    state: &mut EditorState,
    frontend: &mut dyn Frontend,
) -> Result<(), FrontendError> {
    let path = match state.filename.clone() {
        Some(path) => path,
        None => {
            let name = state.prompt(frontend, "Save as: ")?;
            if name.is_empty() {
                state.status_message = SAVE_ABORTED.to_string();
                return Ok(());
            }
            let path = PathBuf::from(name);
            state.filename = Some(path.clone());
            path
        }
    };

    match file::save(state.buffer.lines(), &path) {
        Ok(written) => {
            state.buffer.mark_clean();
            state.status_message = format!("{} bytes written to {}", written, path.display());
        }
        Err(e) => {
            log::warn!("save failed: {}", e);
            state.status_message = format!("Error writing to file: {}", e);
        }
    }
    Ok(())
}

pub fn exit(state: &mut EditorState, force: bool) {
    if !force && state.buffer.is_dirty() {
        state.status_message = UNSAVED_CHANGES.to_string();
        return;
    }
    state.should_quit = true;
}
