use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wavdeck/config.toml` or `~/.config/wavdeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WAVDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Interval between progress refreshes while playing (milliseconds).
    pub tick_ms: u64,
    /// How often each open clip is checked for a natural end (milliseconds).
    pub end_poll_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            end_poll_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Title shown when no track is open.
    pub no_track_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Music Player".to_string(),
            no_track_text: "No Music Playing".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to seek when pressing `H` / `L`.
    pub seek_step_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether looping starts enabled.
    pub looping: bool,
    /// Start the first track as soon as a folder is loaded.
    pub autoplay_on_load: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            looping: false,
            autoplay_on_load: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as playable (without dot).
    pub extensions: Vec<String>,
    /// Match extensions exactly (`a.WAV` is skipped when true).
    pub case_sensitive: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symlinks when listing the folder.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["wav".into()],
            case_sensitive: true,
            include_hidden: true,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is unset (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Log file. The terminal belongs to the UI, so logs never go to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// The configured log file, or `wavdeck.log` in the OS temp directory.
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("wavdeck.log"))
    }
}
