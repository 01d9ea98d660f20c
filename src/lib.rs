//! cadence: a terminal music player built around a shuffle/repeat playlist model.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod library;
pub mod playlist;
pub mod runtime;
pub mod transport;
pub mod ui;

pub use error::{Error, Result};
