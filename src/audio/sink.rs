//! Utilities for creating `rodio` sinks from files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use crate::error::PlaybackError;

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|e| PlaybackError::unreadable(path, e))?;
    Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::unreadable(path, e))
}

/// Total length of `path`, from the decoder when it knows, else from the
/// file's properties.
pub(super) fn probe_duration(path: &Path) -> Result<Duration, PlaybackError> {
    if let Some(d) = decode(path)?.total_duration() {
        return Ok(d);
    }
    Ok(lofty::read_from_path(path)
        .map(|tagged| tagged.properties().duration())
        .unwrap_or(Duration::ZERO))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    mixer: &Mixer,
    path: &Path,
    start_at: Duration,
) -> Result<Sink, PlaybackError> {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decode(path)?.skip_duration(start_at);

    let sink = Sink::connect_new(mixer);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
