//! Folder scanning and the playlist model.

mod model;
mod scan;

pub use model::{Playlist, Track};
pub use scan::load_folder;
