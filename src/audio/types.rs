//! Audio-related small types.
//!
//! This module defines the playback status, the notification sent by open
//! clips, and the progress/display values published for rendering.

/// Identifies one opened clip. A fresh id is handed out on every open, so a
/// notification from an already-closed clip can be told apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClipId(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Notifications delivered from audio threads to the controller's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The clip played through to its end on its own.
    TrackEnded { clip: ClipId },
}

/// Progress of the open clip, in the units the seek control uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// `position / duration`, or 0 when the duration is unknown.
    pub ratio: f64,
    /// Elapsed whole seconds.
    pub value: u64,
    /// Total whole seconds.
    pub max: u64,
    /// `mm:ss / mm:ss`
    pub text: String,
}

/// Everything the UI needs to render the player.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Current track name, `None` when nothing is open.
    pub title: Option<String>,
    pub progress: Progress,
    pub looping: bool,
    /// The seek control only accepts input once a track is open.
    pub seek_enabled: bool,
    pub status: PlaybackStatus,
    /// The last track finished without looping.
    pub ended: bool,
    pub track_index: Option<usize>,
    pub track_count: usize,
}
