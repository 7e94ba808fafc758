//! Mutable playback state owned by the controller.

use super::backend::AudioClip;
use super::types::{ClipId, PlaybackStatus};

pub(super) struct OpenClip<C> {
    pub(super) id: ClipId,
    pub(super) clip: C,
}

/// What is loaded and how far it got.
///
/// Invariants: at most one clip is open; `position_micros <= duration_micros`
/// while one is; progress ticks only run while `Playing`.
pub struct Session<C: AudioClip> {
    pub(super) status: PlaybackStatus,
    pub(super) looping: bool,
    pub(super) position_micros: u64,
    pub(super) duration_micros: u64,
    pub(super) ended: bool,
    pub(super) index: Option<usize>,
    pub(super) clip: Option<OpenClip<C>>,
    pub(super) ticking: bool,
}

impl<C: AudioClip> Session<C> {
    pub(super) fn new(looping: bool) -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            looping,
            position_micros: 0,
            duration_micros: 0,
            ended: false,
            index: None,
            clip: None,
            ticking: false,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[cfg(test)]
    pub fn looping(&self) -> bool {
        self.looping
    }

    #[cfg(test)]
    pub fn position_micros(&self) -> u64 {
        self.position_micros
    }

    pub fn duration_micros(&self) -> u64 {
        self.duration_micros
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    #[cfg(test)]
    pub fn ended(&self) -> bool {
        self.ended
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    #[cfg(test)]
    pub fn has_open_clip(&self) -> bool {
        self.clip.is_some()
    }

    #[cfg(test)]
    pub fn open_clip_id(&self) -> Option<ClipId> {
        self.clip.as_ref().map(|open| open.id)
    }

    /// Stop and close the open clip, if any, and forget its progress.
    pub(super) fn release(&mut self) {
        if let Some(mut open) = self.clip.take() {
            open.clip.stop();
            open.clip.close();
            log::debug!("closed clip {:?}", open.id);
        }
        self.status = PlaybackStatus::Stopped;
        self.ticking = false;
        self.ended = false;
        self.position_micros = 0;
        self.duration_micros = 0;
    }
}
