//! `AudioBackend` on top of `rodio`.
//!
//! One output stream is opened for the lifetime of the backend. Each clip
//! owns a `Sink`; repositioning rebuilds the sink at the target with
//! `skip_duration`. rodio has no end-of-stream callback, so every clip gets a
//! small watcher thread that polls its sink and reports a natural end on the
//! event channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::error::PlaybackError;

use super::backend::{AudioBackend, AudioClip};
use super::sink::{create_sink_at, probe_duration};
use super::types::{ClipId, PlayerEvent};

pub struct RodioBackend {
    stream: OutputStream,
    events: Sender<PlayerEvent>,
    end_poll: Duration,
}

impl RodioBackend {
    /// Open the default output device. End-of-track notices go to `events`.
    pub fn open_default(
        events: Sender<PlayerEvent>,
        settings: &AudioSettings,
    ) -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::OutputDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            events,
            end_poll: Duration::from_millis(settings.end_poll_ms.max(1)),
        })
    }
}

impl AudioBackend for RodioBackend {
    type Clip = RodioClip;

    fn open(&mut self, path: &Path, id: ClipId) -> Result<RodioClip, PlaybackError> {
        let duration = probe_duration(path)?;
        let mixer = self.stream.mixer().clone();
        let sink = create_sink_at(&mixer, path, Duration::ZERO)?;

        let shared = Arc::new(ClipShared {
            sink: Mutex::new(sink),
            closed: AtomicBool::new(false),
        });
        spawn_end_watcher(id, shared.clone(), self.events.clone(), self.end_poll);

        log::debug!("opened {} as {id:?} ({duration:?})", path.display());
        Ok(RodioClip {
            path: path.to_path_buf(),
            mixer,
            shared,
            duration,
            offset: Duration::ZERO,
            running: false,
        })
    }
}

struct ClipShared {
    sink: Mutex<Sink>,
    closed: AtomicBool,
}

pub struct RodioClip {
    path: PathBuf,
    mixer: Mixer,
    shared: Arc<ClipShared>,
    duration: Duration,
    /// Where the current sink's source starts within the file.
    offset: Duration,
    running: bool,
}

impl RodioClip {
    fn with_sink<T>(&self, f: impl FnOnce(&Sink) -> T) -> Option<T> {
        self.shared.sink.lock().ok().map(|sink| f(&sink))
    }
}

impl AudioClip for RodioClip {
    fn start(&mut self) {
        self.running = true;
        self.with_sink(Sink::play);
    }

    fn stop(&mut self) {
        self.running = false;
        self.with_sink(Sink::pause);
    }

    fn close(&mut self) {
        if self.shared.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.running = false;
        self.with_sink(Sink::stop);
    }

    fn position_micros(&self) -> u64 {
        let pos = self
            .with_sink(|s| self.offset + s.get_pos())
            .unwrap_or(self.offset)
            .min(self.duration);
        pos.as_micros() as u64
    }

    fn set_position_micros(&mut self, micros: u64) {
        if self.shared.closed.load(Ordering::Acquire) {
            return;
        }
        let target = Duration::from_micros(micros).min(self.duration);

        let fresh = match create_sink_at(&self.mixer, &self.path, target) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("seek failed: {e}");
                return;
            }
        };
        if self.running {
            fresh.play();
        }

        if let Ok(mut sink) = self.shared.sink.lock() {
            let old = std::mem::replace(&mut *sink, fresh);
            old.stop();
        }
        self.offset = target;
    }

    fn duration_micros(&self) -> u64 {
        self.duration.as_micros() as u64
    }
}

impl Drop for RodioClip {
    fn drop(&mut self) {
        self.close();
    }
}

/// Poll `shared` until the clip is closed, sending one `TrackEnded` each
/// time the sink runs dry while not paused.
fn spawn_end_watcher(
    id: ClipId,
    shared: Arc<ClipShared>,
    events: Sender<PlayerEvent>,
    poll: Duration,
) {
    thread::spawn(move || {
        let mut notified = false;
        loop {
            thread::sleep(poll);
            if shared.closed.load(Ordering::Acquire) {
                break;
            }

            let finished = match shared.sink.lock() {
                Ok(sink) => !sink.is_paused() && sink.empty(),
                Err(_) => break,
            };

            if finished && !notified {
                if events.send(PlayerEvent::TrackEnded { clip: id }).is_err() {
                    break;
                }
                notified = true;
            } else if !finished {
                notified = false;
            }
        }
    });
}
