use crate::types::InputMode;
use crate::ui;
use crate::{config::Config, state::AppState};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let state = AppState {
            dark_mode: config.ui.dark_mode,
            ..Default::default()
        };

        // One connection pool shared by every send
        let client = reqwest::Client::new();

        Self {
            state: Arc::new(RwLock::new(state)),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(config.files.export_path.clone(), client),
            config,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % ui::SPINNER.len();
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler.handle_events(Arc::clone(&self.state))?;

            self.persist_theme();
        }

        Ok(())
    }

    /// Write the theme to the config file when the toggle changed it
    fn persist_theme(&mut self) {
        let Ok(dark_mode) = self.state.read().map(|s| s.dark_mode) else {
            return;
        };
        if dark_mode == self.config.ui.dark_mode {
            return;
        }

        match self.config.set_dark_mode(dark_mode) {
            Ok(()) => tracing::debug!(dark_mode, "theme saved"),
            Err(e) => tracing::warn!(error = %e, "failed to save theme"),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };
        let palette = ui::Palette::new(state.dark_mode);

        frame.render_widget(Block::default().style(palette.base()), frame.area());

        // Create main layout: Header, Request line, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Method + URL
                Constraint::Min(0),    // Editor + response
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[2]);

        ui::render_header(
            frame,
            main_chunks[0],
            &state,
            self.spinner_index,
            &palette,
        );
        ui::render_request_line(frame, main_chunks[1], &state, &palette);
        ui::render_editor(frame, body_chunks[0], &state, &palette);
        ui::render_response(frame, body_chunks[1], &state, &palette);
        ui::render_footer(frame, main_chunks[3], &state, &palette);

        // Render modals LAST - after everything else
        match state.input_mode {
            InputMode::EnteringImportPath => {
                ui::render_import_path_modal(frame, &state, &palette);
            }
            InputMode::Alert => {
                if let Some(ref message) = state.alert {
                    ui::render_alert_modal(frame, message, &palette);
                }
            }
            InputMode::Normal
            | InputMode::EditingUrl
            | InputMode::EditingHeader
            | InputMode::EditingBody => {}
        }
    }
}
