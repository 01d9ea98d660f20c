//! The `Playlist` traversal model.
//!
//! `tracks` is fixed per load. `order` is a permutation of track indices and
//! only changes on `load` and on shuffle changes. `cursor` points into
//! `order` and is kept in range whenever the playlist is non-empty.

use std::path::Path;

use log::{debug, warn};

use super::order::{SeededShuffle, Shuffle, identity_order, is_permutation};
use super::types::{OrderPosition, RepeatMode, Track, TrackIndex};

/// Ordered, optionally shuffled and repeated traversal over one load of tracks.
pub struct Playlist<S = SeededShuffle> {
    tracks: Vec<Track>,
    order: Vec<TrackIndex>,
    cursor: OrderPosition,
    shuffle_enabled: bool,
    repeat_mode: RepeatMode,
    shuffler: S,
}

impl Playlist<SeededShuffle> {
    /// Empty playlist, shuffle off, repeat off, entropy-seeded shuffles.
    pub fn new() -> Self {
        Self::with_shuffler(SeededShuffle::from_entropy())
    }

    /// Empty playlist whose shuffled orders are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_shuffler(SeededShuffle::from_seed(seed))
    }
}

impl Default for Playlist<SeededShuffle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shuffle> Playlist<S> {
    /// Empty playlist that draws shuffled orders from `shuffler`.
    pub fn with_shuffler(shuffler: S) -> Self {
        Self {
            tracks: Vec::new(),
            order: Vec::new(),
            cursor: OrderPosition::default(),
            shuffle_enabled: false,
            repeat_mode: RepeatMode::default(),
            shuffler,
        }
    }

    // ---------- building ----------

    /// Replace the tracks wholesale, regenerate the order and reset the cursor.
    ///
    /// Shuffle and repeat settings survive a reload.
    pub fn load(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.regenerate_order();
        debug!(
            "playlist loaded: {} tracks, shuffle={}",
            self.tracks.len(),
            self.shuffle_enabled
        );
    }

    fn regenerate_order(&mut self) {
        let len = self.tracks.len();
        let mut order = identity_order(len);
        if self.shuffle_enabled {
            self.shuffler.shuffle(&mut order);
            if !is_permutation(&order, len) {
                warn!("shuffle source returned a non-permutation of {len} tracks; using load order");
                order = identity_order(len);
            }
        }
        self.order = order;
        self.cursor = OrderPosition::default();
    }

    // ---------- querying ----------

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in load order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Traversal order as indices into `tracks()`.
    pub fn order(&self) -> &[TrackIndex] {
        &self.order
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    /// Cursor position, or `None` for an empty playlist.
    pub fn cursor(&self) -> Option<OrderPosition> {
        (!self.tracks.is_empty()).then_some(self.cursor)
    }

    /// Index of the current track, or `None` for an empty playlist.
    pub fn current_index(&self) -> Option<TrackIndex> {
        self.order.get(self.cursor.get()).copied()
    }

    pub fn current(&self) -> Option<&Track> {
        self.current_index().and_then(|i| self.track(i))
    }

    pub fn track(&self, index: TrackIndex) -> Option<&Track> {
        self.tracks.get(index.get())
    }

    /// The track shown at `position` of the traversal order.
    pub fn entry_at(&self, position: OrderPosition) -> Option<(TrackIndex, &Track)> {
        let index = *self.order.get(position.get())?;
        self.track(index).map(|t| (index, t))
    }

    /// Where in the traversal order `index` sits.
    pub fn position_of(&self, index: TrackIndex) -> Option<OrderPosition> {
        self.order
            .iter()
            .position(|&i| i == index)
            .map(OrderPosition::new)
    }

    /// Load-order index of the track whose location equals `location`.
    pub fn locate_by_identity(&self, location: &Path) -> Option<TrackIndex> {
        self.tracks
            .iter()
            .position(|t| t.location == location)
            .map(TrackIndex::new)
    }

    // ---------- navigation ----------

    /// Advance the cursor according to the repeat mode.
    ///
    /// Returns `None` for an empty playlist and at the end of the order with
    /// repeat off; the cursor is left untouched in both cases.
    pub fn next(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        if self.repeat_mode == RepeatMode::One {
            return self.current();
        }
        let pos = self.cursor.get();
        if pos + 1 < self.order.len() {
            self.cursor = OrderPosition::new(pos + 1);
        } else if self.repeat_mode == RepeatMode::All {
            self.cursor = OrderPosition::new(0);
        } else {
            return None;
        }
        self.current()
    }

    /// Step the cursor back according to the repeat mode.
    pub fn prev(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        if self.repeat_mode == RepeatMode::One {
            return self.current();
        }
        let pos = self.cursor.get();
        if pos > 0 {
            self.cursor = OrderPosition::new(pos - 1);
        } else if self.repeat_mode == RepeatMode::All {
            self.cursor = OrderPosition::new(self.order.len() - 1);
        } else {
            return None;
        }
        self.current()
    }

    /// Move the cursor onto `position` of the traversal order.
    pub fn set_cursor(&mut self, position: OrderPosition) -> Option<&Track> {
        if position.get() >= self.order.len() {
            return None;
        }
        self.cursor = position;
        self.current()
    }

    /// Move the cursor onto the row holding `index`.
    ///
    /// Returns the new cursor, or `None` (cursor unchanged) when `index` is
    /// not part of this load.
    pub fn set_cursor_by_track_index(&mut self, index: TrackIndex) -> Option<OrderPosition> {
        let position = self.position_of(index)?;
        self.cursor = position;
        Some(position)
    }

    // ---------- modes ----------

    /// Flip shuffle and regenerate the order, keeping the current track current.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle_enabled = !self.shuffle_enabled;
        let current = self.current().map(|t| t.location.clone());
        self.regenerate_order();
        if let Some(location) = current {
            if let Some(index) = self.locate_by_identity(&location) {
                self.set_cursor_by_track_index(index);
            }
        }
        debug!("shuffle {}", if self.shuffle_enabled { "on" } else { "off" });
    }

    /// Set shuffle to `enabled`; a change behaves exactly like `toggle_shuffle`.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle_enabled != enabled {
            self.toggle_shuffle();
        }
    }

    /// Advance `Off -> One -> All -> Off` and return the new mode.
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.repeat_mode = self.repeat_mode.successor();
        self.repeat_mode
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }

    /// Rows in traversal order.
    pub fn iter_order(&self) -> impl Iterator<Item = (OrderPosition, TrackIndex, &Track)> + '_ {
        self.order
            .iter()
            .enumerate()
            .filter_map(move |(pos, &index)| {
                self.track(index)
                    .map(|t| (OrderPosition::new(pos), index, t))
            })
    }
}
