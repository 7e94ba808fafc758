//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player with `ratatui`: header, now-playing box,
//! the seek gauge, the status line and the controls footer, plus the
//! open-folder prompt as a popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, InputMode, MessageKind};
use crate::audio::{DisplayState, PlaybackStatus};
use crate::config::{ControlsSettings, UiSettings};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("p/enter", "play");
    map.insert("space", "play/pause");
    map.insert("h/l", "prev/next");
    // H/L is filled dynamically from config.
    map.insert("0-9", "jump");
    map.insert("r", "loop");
    map.insert("o", "open folder");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["p/enter", "space", "h/l", "H/L", "0-9", "r", "o", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{}s", seek_step_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_text(display: &DisplayState) -> &'static str {
    match display.status {
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
        PlaybackStatus::Stopped if display.ended => "Finished",
        PlaybackStatus::Stopped => "Stopped",
    }
}

fn loop_text(looping: bool) -> &'static str {
    if looping { "Loop: ON" } else { "Loop: OFF" }
}

/// Lines of the now-playing box.
fn now_playing_text(app: &App, display: &DisplayState, ui: &UiSettings) -> String {
    let title = display.title.as_deref().unwrap_or(ui.no_track_text.as_str());
    let mut lines = vec![
        format!("Title: {}", title),
        format!("Time: {}", display.progress.text),
    ];

    let mut parts = vec![status_text(display).to_string(), loop_text(display.looping).to_string()];
    if let Some(i) = display.track_index {
        parts.push(format!("Track {}/{}", i + 1, display.track_count));
    }
    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir));
    }
    lines.push(parts.join(" • "));
    lines.join("\n")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    display: &DisplayState,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let now_playing = Paragraph::new(now_playing_text(app, display, ui_settings))
        .block(
            Block::bordered()
                .padding(left_pad())
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    // Seek gauge; dimmed while there is nothing to seek in.
    let gauge_style = if display.seek_enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" position "))
        .gauge_style(gauge_style)
        .ratio(display.progress.ratio.clamp(0.0, 1.0))
        .label(format!("{}s / {}s", display.progress.value, display.progress.max));
    frame.render_widget(gauge, chunks[2]);

    let (message, message_style) = match &app.message {
        Some(m) if m.kind == MessageKind::Error => (
            m.text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Some(m) => (m.text.as_str(), Style::default()),
        None => ("", Style::default()),
    };
    let status = Paragraph::new(message).style(message_style).block(
        Block::bordered()
            .padding(left_pad())
            .title(" status "),
    );
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(controls_text(controls_settings.seek_step_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    if app.mode == InputMode::OpenFolder {
        let popup_area = centered_rect_sized(72, 3, frame.area());
        frame.render_widget(Clear, popup_area);
        let prompt = Paragraph::new(format!("{}_", app.folder_input)).block(
            Block::default()
                .padding(left_pad())
                .borders(Borders::ALL)
                .title(" open folder (enter loads, esc cancels) "),
        );
        frame.render_widget(prompt, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Progress;

    fn display(status: PlaybackStatus, ended: bool) -> DisplayState {
        DisplayState {
            title: Some("song.wav".to_string()),
            progress: Progress {
                ratio: 0.5,
                value: 65,
                max: 130,
                text: "01:05 / 02:10".to_string(),
            },
            looping: true,
            seek_enabled: true,
            status,
            ended,
            track_index: Some(1),
            track_count: 3,
        }
    }

    #[test]
    fn controls_text_includes_seek_step() {
        let text = controls_text(7);
        assert!(text.contains("[H/L] seek -/+7s"));
        assert!(text.contains("[0-9] jump"));
        assert!(text.starts_with("[p/enter] play"));
        assert!(text.ends_with("[q] quit"));
    }

    #[test]
    fn status_text_distinguishes_finished() {
        assert_eq!(status_text(&display(PlaybackStatus::Stopped, true)), "Finished");
        assert_eq!(status_text(&display(PlaybackStatus::Stopped, false)), "Stopped");
        assert_eq!(status_text(&display(PlaybackStatus::Paused, false)), "Paused");
    }

    #[test]
    fn now_playing_text_shows_title_time_and_loop() {
        let mut app = App::new();
        app.set_current_dir("/music".to_string());
        let text = now_playing_text(&app, &display(PlaybackStatus::Playing, false), &UiSettings::default());
        assert!(text.contains("Title: song.wav"));
        assert!(text.contains("Time: 01:05 / 02:10"));
        assert!(text.contains("Loop: ON"));
        assert!(text.contains("Track 2/3"));
        assert!(text.contains("Dir: /music"));
    }

    #[test]
    fn now_playing_text_uses_placeholder_without_track() {
        let mut d = display(PlaybackStatus::Stopped, false);
        d.title = None;
        let text = now_playing_text(&App::new(), &d, &UiSettings::default());
        assert!(text.starts_with("Title: No Music Playing"));
    }
}
