use std::env;
use std::path::Path;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{Controller, PlayerEvent, RodioBackend};
use crate::config::Settings;
use crate::logging;

mod event_loop;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A broken config never keeps the player from starting.
    let (settings, config_problem) = match Settings::load_checked() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(format!("{e}; using defaults"))),
    };
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("wavdeck: logging disabled: {e}");
    }
    if let Some(problem) = &config_problem {
        log::warn!("{problem}");
    }

    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
    let backend = RodioBackend::open_default(event_tx, &settings.audio)?;
    let mut controller = Controller::new(backend, settings.library.clone(), &settings.playback);
    let mut app = App::new();

    match env::args().nth(1) {
        Some(dir) => startup::load_folder(&mut app, &mut controller, Path::new(&dir)),
        None => app.set_info("Press o to open a folder"),
    }
    if let Some(problem) = config_problem {
        app.set_error(problem);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new(&settings.audio);
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &event_rx,
        &mut state,
    );

    controller.shutdown();
    log::info!("shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
