use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::PlaybackError;

use super::model::{Playlist, Track};

fn is_playable_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };

    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .any(|ext| {
            let suffix = format!(".{ext}");
            if settings.case_sensitive {
                name.ends_with(&suffix)
            } else {
                name.to_ascii_lowercase()
                    .ends_with(&suffix.to_ascii_lowercase())
            }
        })
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the playable files directly inside `dir`.
///
/// Subdirectories are never entered and the order is whatever the filesystem
/// enumerates. An unreadable or missing folder is an error; a readable folder
/// without matches yields an empty playlist.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Playlist, PlaybackError> {
    let meta = fs::metadata(dir).map_err(|source| PlaybackError::FolderUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(PlaybackError::FolderUnreadable {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let tracks = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_playable_file(path, settings)
        })
        .map(|path| Track::from_path(&path))
        .collect();

    Ok(Playlist::new(tracks))
}

/// Build the playlist for a folder picked by the user.
///
/// Unlike [`scan`], finding nothing is reported as `NoFilesFound`.
pub fn load_folder(dir: &Path, settings: &LibrarySettings) -> Result<Playlist, PlaybackError> {
    let playlist = scan(dir, settings)?;
    if playlist.is_empty() {
        return Err(PlaybackError::NoFilesFound(dir.to_path_buf()));
    }
    log::info!("loaded {} track(s) from {}", playlist.len(), dir.display());
    Ok(playlist)
}
