use std::fs::OpenOptions;

use anyhow::Context;

use kik::frontend::{Frontend, TerminalFrontend};
use kik::{Config, EditorState};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    // Everything below runs with raw mode held by `frontend`; it is released
    // when `frontend` goes out of scope, before any error is reported.
    let mut frontend =
        TerminalFrontend::new(config.poll_interval).context("terminal setup failed")?;

    let mut state = EditorState::new();
    let (width, height) = frontend.size();
    state.set_dimensions(width, height);

    if let Some(path) = config.path {
        state.open_file(path).context("cannot open file")?;
    }

    frontend.run(&mut state).context("editor loop failed")?;
    frontend.shutdown()?;

    log::info!("exiting");
    Ok(())
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
