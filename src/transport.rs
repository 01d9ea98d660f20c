//! Transport module: the playback-position driver.
//!
//! The `Deck` knows which track is loaded and where playback is, derived from
//! wall-clock time. It reports the end of a track explicitly through
//! `Deck::poll`; it never produces sound.

mod deck;

pub use deck::{Deck, DeckEvent, DeckState};
