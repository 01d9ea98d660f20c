//! Session model: `App`.
//!
//! `App` mediates between the view, the playlist and the deck. The playlist
//! decides *which* track is current; the deck tracks *where* in it playback
//! is; `selected` is the highlighted row, which follows the current track
//! unless the user roams the list.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::playlist::{OrderPosition, Playlist, RepeatMode, Track, TrackIndex};
use crate::transport::{Deck, DeckEvent};

/// The main application model.
pub struct App {
    pub playlist: Playlist,
    pub deck: Deck,
    pub selected: OrderPosition,
    pub follow_playback: bool,
    pub status: String,
    pub current_dir: Option<PathBuf>,
    pub metadata_window: bool,
    /// Folder path being typed after `o`; `None` when no prompt is open.
    pub prompt: Option<String>,
}

impl App {
    /// Create a new `App` around `playlist` and `deck`.
    pub fn new(playlist: Playlist, deck: Deck) -> Self {
        Self {
            playlist,
            deck,
            selected: OrderPosition::default(),
            follow_playback: true,
            status: "Open a folder to start".to_string(),
            current_dir: None,
            metadata_window: false,
            prompt: None,
        }
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// Replace the playlist with `tracks` scanned from `dir`.
    ///
    /// An empty scan keeps the current playlist; returns whether a load happened.
    pub fn open_folder(&mut self, dir: &Path, tracks: Vec<Track>) -> bool {
        if tracks.is_empty() {
            self.status = format!("No supported audio files found in {}", dir.display());
            return false;
        }

        let count = tracks.len();
        self.deck.unload();
        self.playlist.load(tracks);
        self.selected = OrderPosition::default();
        self.follow_playback = true;
        self.current_dir = Some(dir.to_path_buf());
        self.status = format!("Loaded {} tracks from {}", count, dir.display());
        info!("loaded {count} tracks from {}", dir.display());
        true
    }

    /// The track loaded in the deck, if any.
    pub fn now_playing(&self) -> Option<(TrackIndex, &Track)> {
        let index = self.deck.loaded_track()?;
        self.playlist.track(index).map(|t| (index, t))
    }

    /// The track on the highlighted row.
    pub fn selected_track(&self) -> Option<&Track> {
        self.playlist.entry_at(self.selected).map(|(_, t)| t)
    }

    // ---------- transport ----------

    /// Load the playlist's current track into the deck and start it.
    fn play_current(&mut self, now: Instant) {
        let Some(index) = self.playlist.current_index() else {
            return;
        };
        let duration = self.playlist.track(index).and_then(|t| t.duration);
        self.deck.load(index, duration);
        self.deck.play(now);
        if let Some(track) = self.playlist.track(index) {
            self.status = format!("Playing {}", track.title);
        }
        self.sync_selection();
    }

    /// Space: pause, resume, or (re)start the current track.
    pub fn play_pause(&mut self, now: Instant) {
        if !self.has_tracks() {
            self.status = "Open a folder to start".to_string();
            return;
        }
        self.follow_playback = true;
        if self.deck.is_playing() {
            self.deck.pause(now);
            self.status = "Paused".to_string();
        } else if self.deck.is_paused() {
            self.deck.resume(now);
            self.status = "Playing".to_string();
        } else {
            self.play_current(now);
        }
    }

    /// Skip to the next track per the playlist's repeat mode.
    pub fn next(&mut self, now: Instant) {
        self.follow_playback = true;
        if self.playlist.next().is_some() {
            self.play_current(now);
        } else if self.has_tracks() {
            self.status = "End of playlist".to_string();
        }
    }

    /// Go back to the previous track per the playlist's repeat mode.
    pub fn prev(&mut self, now: Instant) {
        self.follow_playback = true;
        if self.playlist.prev().is_some() {
            self.play_current(now);
        } else if self.has_tracks() {
            self.status = "Start of playlist".to_string();
        }
    }

    /// Enter: make the highlighted row current and play it.
    pub fn play_selected(&mut self, now: Instant) {
        if self.playlist.set_cursor(self.selected).is_some() {
            self.follow_playback = true;
            self.play_current(now);
        }
    }

    pub fn seek_by(&mut self, delta_secs: i64, now: Instant) {
        self.deck.seek_by(delta_secs, now);
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.deck.adjust_volume(delta);
        self.status = format!("Volume {:.0}%", self.deck.volume() * 100.0);
    }

    /// Advance on a finished track; returns the deck event that was handled.
    pub fn tick(&mut self, now: Instant) -> Option<DeckEvent> {
        let event = self.deck.poll(now)?;
        match event {
            DeckEvent::Finished(_) => {
                if self.playlist.next().is_some() {
                    self.play_current(now);
                } else {
                    self.deck.stop();
                    self.status = "End of playlist".to_string();
                }
            }
        }
        Some(event)
    }

    // ---------- modes ----------

    /// Toggle shuffle; the current track stays current and the highlight
    /// stays on the same track.
    pub fn toggle_shuffle(&mut self) {
        let highlighted = self.playlist.entry_at(self.selected).map(|(i, _)| i);
        self.playlist.toggle_shuffle();
        if let Some(pos) = highlighted.and_then(|i| self.playlist.position_of(i)) {
            self.selected = pos;
        }
        self.sync_selection();
        self.status = format!(
            "Shuffle: {}",
            if self.playlist.shuffle_enabled() { "On" } else { "Off" }
        );
    }

    /// Cycle the repeat mode and return the new one.
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let mode = self.playlist.cycle_repeat_mode();
        self.status = format!("Repeat: {mode}");
        mode
    }

    // ---------- selection ----------

    /// Move the highlight down one row, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        self.follow_playback = false;
        self.selected = OrderPosition::new((self.selected.get() + 1) % len);
    }

    /// Move the highlight up one row, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        self.follow_playback = false;
        let pos = self.selected.get();
        self.selected = OrderPosition::new(if pos == 0 { len - 1 } else { pos - 1 });
    }

    pub fn select_first(&mut self) {
        if self.has_tracks() {
            self.follow_playback = false;
            self.selected = OrderPosition::new(0);
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.playlist.len().checked_sub(1) {
            self.follow_playback = false;
            self.selected = OrderPosition::new(last);
        }
    }

    /// Put the highlight back on the current track and follow it again.
    pub fn select_current(&mut self) {
        self.follow_playback = true;
        self.sync_selection();
    }

    /// Keep the highlight on the current track while following playback.
    pub fn sync_selection(&mut self) {
        if !self.follow_playback {
            return;
        }
        if let Some(cursor) = self.playlist.cursor() {
            self.selected = cursor;
        }
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }

    // ---------- open-folder prompt ----------

    /// Open the folder prompt, prefilled with the current directory.
    pub fn begin_open_prompt(&mut self) {
        let initial = self
            .current_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();
        self.prompt = Some(initial);
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(p) = self.prompt.as_mut() {
            p.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(p) = self.prompt.as_mut() {
            p.pop();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Close the prompt and return the entered path, if it is not blank.
    pub fn take_prompt(&mut self) -> Option<PathBuf> {
        let text = self.prompt.take()?;
        let text = text.trim();
        (!text.is_empty()).then(|| PathBuf::from(text))
    }
}
