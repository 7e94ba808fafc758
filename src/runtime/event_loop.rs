use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, InputMode};
use crate::audio::{AudioBackend, Controller, PlaybackStatus, PlayerEvent};
use crate::config;
use crate::error::PlaybackError;
use crate::runtime::startup;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    tick: Duration,
    last_tick: Instant,
}

impl EventLoopState {
    pub fn new(audio: &config::AudioSettings) -> Self {
        Self {
            tick: Duration::from_millis(audio.tick_ms.max(1)),
            last_tick: Instant::now(),
        }
    }

    /// True once per elapsed tick interval.
    fn tick_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.tick {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}

/// Main terminal event loop: applies audio notifications, drives the
/// progress tick, draws, and handles input. Returns `Ok(())` when the user
/// quits.
///
/// This thread is the only owner of `controller`; end-of-track notices are
/// drained from `events` here before any session state is touched.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller<B>,
    events: &Receiver<PlayerEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = events.try_recv() {
            controller.handle_event(ev);
        }

        if state.tick_due() {
            controller.on_tick();
        }

        let display = controller.display();
        terminal.draw(|f| ui::draw(f, app, &display, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, controller) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Show errors, and clear a stale message once a command goes through.
fn command<T>(app: &mut App, result: Result<T, PlaybackError>) {
    if app.report(result).is_some() {
        app.clear_message();
    }
}

/// Handle one key press. Returns true when the user asked to quit.
fn handle_key_event<B: AudioBackend>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller<B>,
) -> bool {
    if app.mode == InputMode::OpenFolder {
        match key.code {
            KeyCode::Esc => app.cancel_folder_prompt(),
            KeyCode::Backspace => app.pop_folder_char(),
            KeyCode::Enter => {
                if let Some(dir) = app.submit_folder_prompt() {
                    startup::load_folder(app, controller, &dir);
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.push_folder_char(c),
            _ => {}
        }
        return false;
    }

    let step = settings.controls.seek_step_seconds.min(i64::MAX as u64) as i64;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('p') | KeyCode::Enter => command(app, controller.play()),
        KeyCode::Char(' ') => {
            if controller.session().status() == PlaybackStatus::Playing {
                controller.pause();
            } else {
                command(app, controller.play());
            }
        }
        KeyCode::Char('l') | KeyCode::Char('n') => command(app, controller.next()),
        KeyCode::Char('h') | KeyCode::Char('b') => command(app, controller.previous()),
        KeyCode::Char('L') | KeyCode::Right => {
            controller.seek_by(step);
        }
        KeyCode::Char('H') | KeyCode::Left => {
            controller.seek_by(-step);
        }
        KeyCode::Char(d @ '0'..='9') => {
            let tenths = d.to_digit(10).unwrap_or(0);
            let target = jump_target_secs(controller.session().duration_micros(), tenths);
            controller.seek_seconds(target);
        }
        KeyCode::Char('r') => {
            let looping = controller.toggle_loop();
            app.set_info(if looping { "Loop: ON" } else { "Loop: OFF" });
        }
        KeyCode::Char('o') => app.enter_folder_prompt(),
        KeyCode::Esc => app.clear_message(),
        _ => {}
    }

    false
}

/// Whole-second seek target for the `0`..`9` keys: `tenths` of the track.
fn jump_target_secs(duration_micros: u64, tenths: u32) -> u64 {
    duration_micros / 1_000_000 * u64::from(tenths.min(10)) / 10
}
