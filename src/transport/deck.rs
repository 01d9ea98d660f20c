use std::time::{Duration, Instant};

use log::debug;

use crate::playlist::TrackIndex;

/// Transport state of the deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DeckState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Something the owner of the deck has to react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeckEvent {
    /// The loaded track played through to its end.
    Finished(TrackIndex),
}

#[derive(Copy, Clone, Debug)]
struct Loaded {
    track: TrackIndex,
    duration: Option<Duration>,
}

/// Wall-clock playback position for one loaded track.
///
/// Position = `offset` + time since `started_at` while playing. Every method
/// that depends on time takes `now` from the caller.
#[derive(Debug)]
pub struct Deck {
    loaded: Option<Loaded>,
    state: DeckState,
    started_at: Option<Instant>,
    offset: Duration,
    volume: f32,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Deck {
    pub fn new(volume: f32) -> Self {
        Self {
            loaded: None,
            state: DeckState::Stopped,
            started_at: None,
            offset: Duration::ZERO,
            volume: clamp_volume(volume),
        }
    }

    // ---------- control ----------

    /// Load `track`, stopped at position zero.
    pub fn load(&mut self, track: TrackIndex, duration: Option<Duration>) {
        self.loaded = Some(Loaded { track, duration });
        self.reset_clock();
    }

    pub fn unload(&mut self) {
        self.loaded = None;
        self.reset_clock();
    }

    /// Start playback from the current offset.
    pub fn play(&mut self, now: Instant) {
        if self.loaded.is_none() {
            return;
        }
        self.started_at = Some(now);
        self.state = DeckState::Playing;
        debug!("deck play at {:?}", self.offset);
    }

    pub fn pause(&mut self, now: Instant) {
        if self.state != DeckState::Playing {
            return;
        }
        self.offset = self.position(now);
        self.started_at = None;
        self.state = DeckState::Paused;
    }

    pub fn resume(&mut self, now: Instant) {
        if self.state != DeckState::Paused {
            return;
        }
        self.started_at = Some(now);
        self.state = DeckState::Playing;
    }

    /// Stop and rewind; the track stays loaded.
    pub fn stop(&mut self) {
        self.reset_clock();
    }

    /// Jump to `position` (clamped to the track length when known) and play.
    pub fn seek(&mut self, position: Duration, now: Instant) {
        if self.loaded.is_none() {
            return;
        }
        self.offset = match self.duration() {
            Some(total) => position.min(total),
            None => position,
        };
        self.play(now);
    }

    /// Seek relative to the current position; negative values move backwards.
    pub fn seek_by(&mut self, delta_secs: i64, now: Instant) {
        let pos = self.position(now);
        let delta = Duration::from_secs(delta_secs.unsigned_abs());
        let target = if delta_secs < 0 {
            pos.saturating_sub(delta)
        } else {
            pos.saturating_add(delta)
        };
        self.seek(target, now);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    // ---------- state ----------

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == DeckState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state == DeckState::Paused
    }

    pub fn loaded_track(&self) -> Option<TrackIndex> {
        self.loaded.map(|l| l.track)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.loaded.and_then(|l| l.duration)
    }

    pub fn position(&self, now: Instant) -> Duration {
        match (self.state, self.started_at) {
            (DeckState::Playing, Some(start)) => {
                self.offset + now.saturating_duration_since(start)
            }
            _ => self.offset,
        }
    }

    /// Fraction of the track played, when the duration is known and non-zero.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        let total = self.duration().filter(|d| !d.is_zero())?;
        let ratio = self.position(now).as_secs_f64() / total.as_secs_f64();
        Some(ratio.clamp(0.0, 1.0))
    }

    /// Report the end of the loaded track.
    ///
    /// Emits `Finished` once, when playing with a known duration and the
    /// position has reached it; the deck is then stopped at the end position.
    pub fn poll(&mut self, now: Instant) -> Option<DeckEvent> {
        if self.state != DeckState::Playing {
            return None;
        }
        let loaded = self.loaded?;
        let total = loaded.duration?;
        if self.position(now) < total {
            return None;
        }
        self.offset = total;
        self.started_at = None;
        self.state = DeckState::Stopped;
        debug!("deck finished {}", loaded.track);
        Some(DeckEvent::Finished(loaded.track))
    }

    fn reset_clock(&mut self) {
        self.state = DeckState::Stopped;
        self.started_at = None;
        self.offset = Duration::ZERO;
    }
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
