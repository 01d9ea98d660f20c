//! Playlist module: the traversal model behind the player.
//!
//! A `Playlist` owns the tracks of one load, a traversal `order` over them
//! (identity or shuffled), a cursor into that order and the repeat mode.

mod model;
mod order;
mod types;

pub use model::Playlist;
pub use order::{SeededShuffle, Shuffle, identity_order, is_permutation};
pub use types::{OrderPosition, RepeatMode, Track, TrackIndex};

#[cfg(test)]
mod tests;
