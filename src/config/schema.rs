use serde::{Deserialize, Serialize};

use crate::playlist::RepeatMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadence/config.toml` or `~/.config/cadence/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENCE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub transport: TransportSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Repeat mode at startup.
    pub repeat: RepeatModeSetting,
    /// Fixed shuffle seed; random when unset.
    pub seed: Option<u64>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat: RepeatModeSetting::Off,
            seed: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "none", alias = "no-repeat", alias = "no_repeat")]
    Off,
    #[serde(
        alias = "single",
        alias = "repeat-one",
        alias = "repeat_one",
        alias = "loop-one"
    )]
    One,
    #[serde(
        alias = "repeat-all",
        alias = "repeat_all",
        alias = "loop-all",
        alias = "loop-around"
    )]
    All,
}

impl From<RepeatModeSetting> for RepeatMode {
    fn from(setting: RepeatModeSetting) -> Self {
        match setting {
            RepeatModeSetting::Off => RepeatMode::Off,
            RepeatModeSetting::One => RepeatMode::One,
            RepeatModeSetting::All => RepeatMode::All,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Initial volume in `[0, 1]`.
    pub volume: f32,
    /// Volume change per `+` / `-` press.
    pub volume_step: f32,
    /// Number of seconds to scrub with the arrow keys / `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            volume: 0.7,
            volume_step: 0.05,
            scrub_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Redraw / position refresh interval (milliseconds).
    pub tick_ms: u64,

    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which track fields make up a playlist row, and in what order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub row_fields: Vec<TrackField>,

    /// Separator used to join `row_fields`.
    pub row_separator: String,

    /// Which track fields to show on the "now playing" line.
    pub now_playing_fields: Vec<TrackField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            header_text: " ~ cadence ~ ".to_string(),
            row_fields: vec![TrackField::Artist, TrackField::Title],
            row_separator: " - ".to_string(),
            now_playing_fields: vec![TrackField::Title, TrackField::Artist, TrackField::Album],
            now_playing_separator: " • ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp3", "wav", "flac", "ogg", "aac", "m4a"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
