//! Application module: exposes the session model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and ties the playlist, the deck and
//! the view's selection together.

mod model;

pub use model::*;
