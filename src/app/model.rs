//! Application model types: `App` and the folder prompt.
//!
//! `App` holds UI-only state: the input mode, the folder being typed, the
//! current folder and the last message. Playback state lives in the
//! controller.

use std::path::PathBuf;

use crate::error::PlaybackError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a folder path to load.
    OpenFolder,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// The main application model.
#[derive(Debug, Default)]
pub struct App {
    pub mode: InputMode,
    pub folder_input: String,
    pub current_dir: Option<String>,
    pub message: Option<StatusMessage>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the folder the playlist was built from.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Open the folder prompt, pre-filled with the current folder.
    pub fn enter_folder_prompt(&mut self) {
        self.mode = InputMode::OpenFolder;
        self.folder_input = self.current_dir.clone().unwrap_or_default();
    }

    pub fn cancel_folder_prompt(&mut self) {
        self.mode = InputMode::Normal;
        self.folder_input.clear();
    }

    pub fn push_folder_char(&mut self, c: char) {
        self.folder_input.push(c);
    }

    pub fn pop_folder_char(&mut self) {
        self.folder_input.pop();
    }

    /// Leave the prompt and return the typed path, if any.
    ///
    /// A leading `~` is expanded from `$HOME`.
    pub fn submit_folder_prompt(&mut self) -> Option<PathBuf> {
        self.mode = InputMode::Normal;
        let raw = std::mem::take(&mut self.folder_input);
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if raw == "~" || raw.starts_with("~/") {
            if let Some(home) = std::env::var_os("HOME") {
                let rest = raw.trim_start_matches('~').trim_start_matches('/');
                return Some(PathBuf::from(home).join(rest));
            }
        }
        Some(PathBuf::from(raw))
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind: MessageKind::Info,
            text: text.into(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind: MessageKind::Error,
            text: text.into(),
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Show a failed command on the status line; pass successes through.
    pub fn report<T>(&mut self, result: Result<T, PlaybackError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{e}");
                self.set_error(e.to_string());
                None
            }
        }
    }
}
