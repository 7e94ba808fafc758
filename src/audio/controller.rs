//! The playback state machine.
//!
//! `Controller` owns the playlist and the [`Session`], and is the only thing
//! that touches the open clip. It is meant to live on a single thread: the
//! environment calls the commands, calls [`Controller::on_tick`] on a fixed
//! interval and forwards every [`PlayerEvent`] it receives.

use std::path::Path;

use crate::config::{LibrarySettings, PlaybackSettings};
use crate::error::PlaybackError;
use crate::library::{self, Playlist};

use super::backend::{AudioBackend, AudioClip};
use super::format::{progress, secs_to_micros};
use super::session::{OpenClip, Session};
use super::types::{ClipId, DisplayState, PlaybackStatus, PlayerEvent, Progress};

pub struct Controller<B: AudioBackend> {
    backend: B,
    library: LibrarySettings,
    autoplay_on_load: bool,
    playlist: Playlist,
    session: Session<B::Clip>,
    next_clip: u64,
}

impl<B: AudioBackend> Controller<B> {
    pub fn new(backend: B, library: LibrarySettings, playback: &PlaybackSettings) -> Self {
        Self {
            backend,
            library,
            autoplay_on_load: playback.autoplay_on_load,
            playlist: Playlist::default(),
            session: Session::new(playback.looping),
            next_clip: 0,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn session(&self) -> &Session<B::Clip> {
        &self.session
    }

    /// Replace the playlist with the playable files of `dir`.
    ///
    /// The open clip is released first. When the folder has no matches the
    /// playlist ends up empty and `NoFilesFound` is returned; an unreadable
    /// folder leaves everything untouched.
    pub fn load_folder(&mut self, dir: &Path) -> Result<(), PlaybackError> {
        let playlist = match library::load_folder(dir, &self.library) {
            Ok(p) => p,
            Err(e @ PlaybackError::NoFilesFound(_)) => {
                self.replace_playlist(Playlist::default());
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.replace_playlist(playlist);
        if self.autoplay_on_load {
            self.play()
        } else {
            Ok(())
        }
    }

    fn replace_playlist(&mut self, playlist: Playlist) {
        self.session.release();
        self.session.index = if playlist.is_empty() { None } else { Some(0) };
        self.playlist = playlist;
    }

    /// Resume a paused clip, otherwise (re)open the current track from 0.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        if self.session.status == PlaybackStatus::Paused {
            if let Some(open) = self.session.clip.as_mut() {
                open.clip.start();
                self.session.status = PlaybackStatus::Playing;
                self.session.ticking = true;
                log::debug!("resumed at {}us", self.session.position_micros);
                return Ok(());
            }
        }

        self.open_current()
    }

    fn open_current(&mut self) -> Result<(), PlaybackError> {
        let index = self.session.index.unwrap_or(0);
        let Some(track) = self.playlist.get(index).cloned() else {
            return Err(PlaybackError::EmptyPlaylist);
        };

        // Only one clip may exist at a time: close before opening.
        self.session.release();
        self.session.index = Some(index);

        let id = ClipId(self.next_clip);
        self.next_clip += 1;

        match self.backend.open(&track.path, id) {
            Ok(mut clip) => {
                self.session.duration_micros = clip.duration_micros();
                clip.start();
                self.session.clip = Some(OpenClip { id, clip });
                self.session.status = PlaybackStatus::Playing;
                self.session.ticking = true;
                log::info!("playing {} ({}/{})", track.name, index + 1, self.playlist.len());
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to open {}: {e}", track.path.display());
                Err(e)
            }
        }
    }

    /// Pause while playing; a no-op otherwise. Returns whether anything changed.
    pub fn pause(&mut self) -> bool {
        if self.session.status != PlaybackStatus::Playing {
            return false;
        }
        if let Some(open) = self.session.clip.as_mut() {
            open.clip.stop();
            self.session.position_micros =
                open.clip.position_micros().min(self.session.duration_micros);
        }
        self.session.status = PlaybackStatus::Paused;
        self.session.ticking = false;
        log::debug!("paused at {}us", self.session.position_micros);
        true
    }

    /// Open the following track. At the last track this is a silent no-op
    /// and `Ok(false)` is returned.
    pub fn next(&mut self) -> Result<bool, PlaybackError> {
        let target = match self.session.index {
            Some(i) if i + 1 < self.playlist.len() => i + 1,
            _ => return Ok(false),
        };
        self.session.index = Some(target);
        self.open_current().map(|_| true)
    }

    /// Open the preceding track. At the first track this is a silent no-op.
    pub fn previous(&mut self) -> Result<bool, PlaybackError> {
        let target = match self.session.index {
            Some(i) if i > 0 && !self.playlist.is_empty() => i - 1,
            _ => return Ok(false),
        };
        self.session.index = Some(target);
        self.open_current().map(|_| true)
    }

    /// Flip looping and return the new value. Status is never affected.
    pub fn toggle_loop(&mut self) -> bool {
        self.session.looping = !self.session.looping;
        log::debug!("looping = {}", self.session.looping);
        self.session.looping
    }

    /// Reposition the open clip, clamped to its duration.
    ///
    /// Does not start or stop playback. Returns false when nothing is open.
    pub fn seek(&mut self, target_micros: u64) -> bool {
        let duration = self.session.duration_micros;
        let Some(open) = self.session.clip.as_mut() else {
            return false;
        };
        let clamped = target_micros.min(duration);
        open.clip.set_position_micros(clamped);
        self.session.position_micros = clamped;
        self.session.ended = false;
        true
    }

    /// Seek to a value taken from the seek control, in whole seconds.
    pub fn seek_seconds(&mut self, secs: u64) -> bool {
        self.seek(secs_to_micros(secs))
    }

    /// Seek relative to the current position by `delta_secs` (may be negative).
    pub fn seek_by(&mut self, delta_secs: i64) -> bool {
        let current = match self.session.clip.as_ref() {
            Some(open) if self.session.ticking => open.clip.position_micros(),
            Some(_) => self.session.position_micros,
            None => return false,
        };
        let delta = secs_to_micros(delta_secs.unsigned_abs());
        let target = if delta_secs < 0 {
            current.saturating_sub(delta)
        } else {
            current.saturating_add(delta)
        };
        self.seek(target)
    }

    /// Refresh the position while playing.
    ///
    /// Returns `None` without touching anything when paused or stopped.
    pub fn on_tick(&mut self) -> Option<Progress> {
        if !self.session.ticking {
            return None;
        }
        let open = self.session.clip.as_ref()?;
        let duration = self.session.duration_micros;
        let position = open.clip.position_micros().min(duration);
        self.session.position_micros = position;
        Some(progress(position, duration))
    }

    /// Apply a notification from the audio side. Returns whether state changed.
    pub fn handle_event(&mut self, event: PlayerEvent) -> bool {
        match event {
            PlayerEvent::TrackEnded { clip } => self.on_track_ended(clip),
        }
    }

    fn on_track_ended(&mut self, id: ClipId) -> bool {
        let looping = self.session.looping;
        let status = self.session.status;
        let Some(open) = self.session.clip.as_mut() else {
            return false;
        };
        if open.id != id || status == PlaybackStatus::Stopped {
            log::debug!("ignoring end of stale clip {id:?}");
            return false;
        }

        if looping {
            open.clip.set_position_micros(0);
            if status == PlaybackStatus::Playing {
                open.clip.start();
            }
            self.session.position_micros = 0;
            log::debug!("looping clip {id:?}");
        } else {
            open.clip.stop();
            self.session.status = PlaybackStatus::Stopped;
            self.session.ticking = false;
            self.session.ended = true;
            self.session.position_micros = self.session.duration_micros;
            log::info!("track finished");
        }
        true
    }

    /// Snapshot of what the UI should show.
    pub fn display(&self) -> DisplayState {
        let title = self
            .session
            .clip
            .as_ref()
            .and(self.session.index)
            .and_then(|i| self.playlist.get(i))
            .map(|t| t.name.clone());

        DisplayState {
            title,
            progress: progress(self.session.position_micros, self.session.duration_micros),
            looping: self.session.looping,
            seek_enabled: self.session.clip.is_some(),
            status: self.session.status,
            ended: self.session.ended,
            track_index: self.session.index,
            track_count: self.playlist.len(),
        }
    }

    /// Close the open clip. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.session.release();
    }
}
