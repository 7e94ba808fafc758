use std::path::Path;

use crate::app::App;
use crate::audio::{AudioBackend, Controller};
use crate::error::PlaybackError;

/// Load `dir` into the controller and record the outcome on the status line.
///
/// Used both for the folder given on the command line and for the
/// open-folder prompt.
pub fn load_folder<B: AudioBackend>(app: &mut App, controller: &mut Controller<B>, dir: &Path) {
    app.clear_message();
    let result = controller.load_folder(dir);

    // An unreadable folder leaves the old playlist in place.
    if !matches!(result, Err(PlaybackError::FolderUnreadable { .. })) {
        app.set_current_dir(dir.display().to_string());
    }

    if app.report(result).is_some() {
        app.set_info(format!(
            "Loaded {} track(s) from {}",
            controller.playlist().len(),
            dir.display()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MessageKind;
    use crate::audio::{AudioClip, ClipId};
    use crate::config::{LibrarySettings, PlaybackSettings};

    struct SilentBackend;
    struct SilentClip;

    impl AudioClip for SilentClip {
        fn start(&mut self) {}
        fn stop(&mut self) {}
        fn close(&mut self) {}
        fn position_micros(&self) -> u64 {
            0
        }
        fn set_position_micros(&mut self, _micros: u64) {}
        fn duration_micros(&self) -> u64 {
            1_000_000
        }
    }

    impl AudioBackend for SilentBackend {
        type Clip = SilentClip;
        fn open(&mut self, _path: &Path, _id: ClipId) -> Result<SilentClip, PlaybackError> {
            Ok(SilentClip)
        }
    }

    fn controller() -> Controller<SilentBackend> {
        Controller::new(
            SilentBackend,
            LibrarySettings::default(),
            &PlaybackSettings::default(),
        )
    }

    #[test]
    fn successful_load_sets_dir_and_info() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.wav"), b"RIFF").unwrap();
        let mut app = App::new();
        let mut c = controller();

        load_folder(&mut app, &mut c, dir.path());
        assert_eq!(app.current_dir, Some(dir.path().display().to_string()));
        let msg = app.message.unwrap();
        assert_eq!(msg.kind, MessageKind::Info);
        assert!(msg.text.starts_with("Loaded 1 track(s)"));
    }

    #[test]
    fn empty_folder_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        let mut c = controller();

        load_folder(&mut app, &mut c, dir.path());
        let msg = app.message.unwrap();
        assert_eq!(msg.kind, MessageKind::Error);
        assert!(msg.text.starts_with("No WAV files found"));
    }

    #[test]
    fn unreadable_folder_keeps_previous_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.set_current_dir("/before".to_string());
        let mut c = controller();

        load_folder(&mut app, &mut c, &dir.path().join("missing"));
        assert_eq!(app.current_dir.as_deref(), Some("/before"));
        assert_eq!(app.message.unwrap().kind, MessageKind::Error);
    }
}
