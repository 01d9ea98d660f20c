//! Value types shared by the playlist and its collaborators.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One audio item as handed over by the metadata provider.
///
/// `location` is the identity of the track within a load; every other field
/// is display metadata the playlist never inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub location: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

impl Track {
    /// A track with only a location and a title.
    pub fn new(location: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            title: title.into(),
            artist: None,
            album: None,
            duration: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Index into the playlist's `tracks` (load order).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackIndex(usize);

impl TrackIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TrackIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track #{}", self.0)
    }
}

/// Position within the playlist's traversal `order` (what the view shows as a row).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OrderPosition(usize);

impl OrderPosition {
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for OrderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// What happens when traversal reaches either end of the order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Stop at either end of the order.
    #[default]
    Off,
    /// Pin the current track: next/prev keep returning it.
    One,
    /// Wrap around at either end.
    All,
}

impl RepeatMode {
    /// The next mode in the `Off -> One -> All -> Off` cycle.
    pub const fn successor(self) -> Self {
        match self {
            Self::Off => Self::One,
            Self::One => Self::All,
            Self::All => Self::Off,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::One => "One",
            Self::All => "All",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
