use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use log::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::playlist::Track;

/// True when `path` has one of the configured audio extensions (case-insensitive).
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();

    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .any(|e| !e.is_empty() && e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Read a track's metadata, best effort.
///
/// Untagged or unreadable files still produce a track titled after the file
/// stem with no artist, album or duration.
pub fn read_track(path: &Path) -> Track {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut track = Track::new(path, stem);

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            debug!("no metadata for {}: {e}", path.display());
            return track;
        }
    };

    let duration = tagged.properties().duration();
    if !duration.is_zero() {
        track.duration = Some(duration);
    }

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(title) = non_blank(tag.title()) {
            track.title = title;
        }
        track.artist = non_blank(tag.artist());
        track.album = non_blank(tag.album());
    }

    track
}

/// Collect the audio files under `dir` as tracks, sorted by location.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(read_track(path));
        }
    }

    tracks.sort_by(|a, b| a.location.cmp(&b.location));
    info!("scanned {}: {} tracks", dir.display(), tracks.len());
    Ok(tracks)
}
