//! Errors surfaced by playback commands.
//!
//! Every variant except `OutputDevice` is recoverable: the runtime shows the
//! message on the status line and waits for the next command.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// `play` was requested with nothing loaded.
    #[error("No music to play.")]
    EmptyPlaylist,

    /// The selected folder holds no file matching the configured extensions.
    #[error("No WAV files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    /// The track could not be opened or decoded.
    #[error("Error playing {}: {reason}", .path.display())]
    UnsupportedOrUnreadableFile { path: PathBuf, reason: String },

    /// The folder itself could not be read.
    #[error("Cannot read folder {}: {source}", .path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No usable audio output device.
    #[error("No audio output device: {0}")]
    OutputDevice(String),
}

impl PlaybackError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnsupportedOrUnreadableFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(PlaybackError::EmptyPlaylist.to_string(), "No music to play.");
        assert_eq!(
            PlaybackError::NoFilesFound(PathBuf::from("/music")).to_string(),
            "No WAV files found in /music"
        );
        assert_eq!(
            PlaybackError::unreadable("/music/a.wav", "bad header").to_string(),
            "Error playing /music/a.wav: bad header"
        );
    }
}
