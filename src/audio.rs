//! Audio module: the playback controller and the backend it drives.
//!
//! `Controller` holds all playback state and is driven from a single thread.
//! `RodioBackend` is the production backend; tests use an in-memory one.

mod backend;
mod controller;
mod format;
mod rodio_backend;
mod session;
mod sink;
mod types;

pub use backend::{AudioBackend, AudioClip};
pub use controller::Controller;
pub use rodio_backend::RodioBackend;
pub use session::Session;
pub use types::{ClipId, DisplayState, PlaybackStatus, PlayerEvent, Progress};
