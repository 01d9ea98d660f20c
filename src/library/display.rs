use crate::config::TrackField;
use crate::playlist::Track;

/// Build a display string for `track` from the configured `fields`, joined by `sep`.
///
/// Blank fields are skipped; when nothing is produced the title is used.
pub fn display_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackField::Artist => {
                if let Some(a) = track.artist.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackField::Album => {
                if let Some(a) = track.album.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackField::Filename => {
                if let Some(stem) = track.location.file_stem().and_then(|s| s.to_str()) {
                    if !stem.trim().is_empty() {
                        parts.push(stem.to_string());
                    }
                }
            }
            TrackField::Path => {
                parts.push(track.location.display().to_string());
            }
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}
