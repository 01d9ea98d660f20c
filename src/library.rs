//! Library module: turns a folder into the track list the playlist consumes.
//!
//! `scan` walks a directory, keeps audio files and reads their tags;
//! `display` renders track metadata for the view.

mod display;
mod scan;

pub use display::display_from_fields;
pub use scan::{is_audio_file, read_track, scan};
