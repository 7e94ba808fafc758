//! The seam between the controller and whatever actually produces sound.
//!
//! The controller only relies on this contract; it never decodes audio
//! itself. End-of-track is not part of the trait: implementations report it
//! as [`PlayerEvent::TrackEnded`](super::PlayerEvent) on the channel they were
//! built with.

use std::path::Path;

use crate::error::PlaybackError;

use super::types::ClipId;

pub trait AudioBackend {
    type Clip: AudioClip;

    /// Open `path` as a stopped clip positioned at 0.
    ///
    /// Fails with `UnsupportedOrUnreadableFile` when the file is missing or
    /// cannot be decoded. Nothing stays open on failure.
    fn open(&mut self, path: &Path, id: ClipId) -> Result<Self::Clip, PlaybackError>;
}

pub trait AudioClip {
    /// Start or resume output from the current position.
    fn start(&mut self);
    /// Halt output, keeping the position.
    fn stop(&mut self);
    /// Release the underlying resource. The clip is unusable afterwards.
    fn close(&mut self);
    fn position_micros(&self) -> u64;
    /// Reposition without changing whether the clip is running.
    fn set_position_micros(&mut self, micros: u64);
    fn duration_micros(&self) -> u64;
}
