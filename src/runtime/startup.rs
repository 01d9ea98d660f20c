use std::path::Path;

use log::warn;

use crate::app::App;
use crate::config::{LibrarySettings, Settings};
use crate::library;
use crate::playlist::Playlist;
use crate::transport::Deck;

/// Build an empty `App` from settings: seeded or entropy shuffles, initial volume.
pub fn build_app(settings: &Settings) -> App {
    let playlist = match settings.playback.seed {
        Some(seed) => Playlist::seeded(seed),
        None => Playlist::new(),
    };
    App::new(playlist, Deck::new(settings.transport.volume))
}

/// Apply the configured shuffle and repeat modes.
pub fn apply_playback_defaults(app: &mut App, settings: &Settings) {
    app.playlist.set_repeat_mode(settings.playback.repeat.into());
    app.playlist.set_shuffle(settings.playback.shuffle);
    app.sync_selection();
}

/// Scan `dir` and load it into `app`; a failed scan only updates the status.
pub fn load_folder(app: &mut App, dir: &Path, settings: &LibrarySettings) -> bool {
    match library::scan(dir, settings) {
        Ok(tracks) => app.open_folder(dir, tracks),
        Err(e) => {
            warn!("cannot open {}: {e}", dir.display());
            app.status = format!("Cannot open folder: {e}");
            false
        }
    }
}
