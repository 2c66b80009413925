mod actions;
mod app;
mod config;
mod draft;
mod format;
mod logging;
mod request;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(&config.log)?;

    let terminal = ratatui::init();
    // Pastes then arrive as one event instead of a burst of keys
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        tracing::warn!(error = %e, "bracketed paste unavailable");
    }

    let app_result = App::new(config).run(terminal).await;

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Err(ref e) = app_result {
        tracing::error!(error = %e, "app exited with error");
    }
    app_result
}
