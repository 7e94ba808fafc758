use super::*;
use crate::error::PlaybackError;
use std::path::PathBuf;

#[test]
fn folder_prompt_starts_from_current_dir() {
    let mut app = App::new();
    app.set_current_dir("/music".to_string());

    app.enter_folder_prompt();
    assert_eq!(app.mode, InputMode::OpenFolder);
    assert_eq!(app.folder_input, "/music");
}

#[test]
fn folder_prompt_edits_and_submits() {
    let mut app = App::new();
    app.enter_folder_prompt();
    for c in "/tmp/songsx".chars() {
        app.push_folder_char(c);
    }
    app.pop_folder_char();

    assert_eq!(app.submit_folder_prompt(), Some(PathBuf::from("/tmp/songs")));
    assert_eq!(app.mode, InputMode::Normal);
    assert!(app.folder_input.is_empty());
}

#[test]
fn blank_submission_yields_nothing() {
    let mut app = App::new();
    app.enter_folder_prompt();
    app.push_folder_char(' ');
    assert_eq!(app.submit_folder_prompt(), None);
    assert_eq!(app.mode, InputMode::Normal);
}

#[test]
fn cancel_discards_input() {
    let mut app = App::new();
    app.enter_folder_prompt();
    app.push_folder_char('x');
    app.cancel_folder_prompt();
    assert_eq!(app.mode, InputMode::Normal);
    assert!(app.folder_input.is_empty());
}

#[test]
fn report_turns_errors_into_messages() {
    let mut app = App::new();
    assert_eq!(app.report(Ok::<_, PlaybackError>(3)), Some(3));
    assert!(app.message.is_none());

    assert_eq!(app.report::<()>(Err(PlaybackError::EmptyPlaylist)), None);
    let msg = app.message.clone().unwrap();
    assert_eq!(msg.kind, MessageKind::Error);
    assert_eq!(msg.text, "No music to play.");

    app.clear_message();
    assert!(app.message.is_none());
}
